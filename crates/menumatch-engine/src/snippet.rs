//! Sentence-aware snippet extraction around a matched term.

use crate::vocab::find_term;

/// Maximum snippet length, in characters.
pub const SNIPPET_MAX: usize = 195;

/// Split text into sentence byte ranges, retaining terminal punctuation
/// with the preceding sentence (no lookbehind — Rust regex doesn't support
/// it, so this is a manual scan).
pub(crate) fn sentence_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if (b == b'.' || b == b'!' || b == b'?')
            && i + 1 < bytes.len()
            && bytes[i + 1].is_ascii_whitespace()
        {
            if let Some(span) = trimmed_span(text, start, i + 1) {
                spans.push(span);
            }
            start = i + 1;
        }
    }
    if let Some(span) = trimmed_span(text, start, text.len()) {
        spans.push(span);
    }
    spans
}

/// Narrow `[start, end)` to exclude surrounding whitespace; `None` if the
/// slice is blank.
fn trimmed_span(text: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return None;
    }
    let s = start + (trimmed.as_ptr() as usize - slice.as_ptr() as usize);
    Some((s, s + trimmed.len()))
}

/// Extract a bounded, human-readable excerpt of `text` around `term`.
///
/// Prefers the first sentence containing the term, extended by the next
/// sentence when the pair fits in `max_len`. Over-long anchor sentences are
/// truncated with an ellipsis. When no single sentence holds the term (it
/// may span a sentence break), falls back to a raw character window around
/// the first occurrence. Returns `None` when the term is absent.
pub fn extract_snippet(text: &str, term: &str, max_len: usize) -> Option<String> {
    if term.is_empty() {
        return None;
    }
    let spans = sentence_spans(text);
    let term_lower = term.to_lowercase();

    let anchor_idx = spans
        .iter()
        .position(|&(s, e)| text[s..e].to_lowercase().contains(&term_lower));

    if let Some(i) = anchor_idx {
        let (s, e) = spans[i];
        let anchor = &text[s..e];
        let anchor_len = anchor.chars().count();

        if anchor_len <= max_len {
            // Append the following complete sentence when the pair fits.
            if let Some(&(ns, ne)) = spans.get(i + 1) {
                let next = &text[ns..ne];
                if anchor_len + 1 + next.chars().count() <= max_len {
                    return Some(format!("{anchor} {next}"));
                }
            }
            return Some(anchor.to_string());
        }

        let head: String = anchor.chars().take(max_len.saturating_sub(3)).collect();
        return Some(format!("{head}..."));
    }

    // Raw character window: 40 chars before the first occurrence.
    let (hit_start, _) = find_term(text, term)?;
    let prefix_chars = text[..hit_start].chars().count();
    let skip = prefix_chars.saturating_sub(40);
    let window: String = text.chars().skip(skip).take(max_len).collect();
    let mut out = if skip > 0 {
        format!("...{window}")
    } else {
        window
    };
    if out.chars().count() > max_len {
        out = out.chars().take(max_len).collect();
    }
    Some(out)
}
