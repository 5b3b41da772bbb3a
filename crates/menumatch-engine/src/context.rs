//! General-context extraction: the most food-relevant sentence of a review.

use crate::snippet::sentence_spans;
use crate::vocab::FOOD_CONTEXT_WORDS;

/// Minimum sentence length considered for general context.
const MIN_CONTEXT_SENTENCE: usize = 20;

/// Pick the sentence with the most food-vocabulary mentions.
///
/// Only sentences whose length falls in `[20, max_len]` qualify. Scoring
/// counts case-insensitive substring occurrences of the food vocabulary;
/// a strict greater-than comparison keeps the earliest sentence on ties.
/// Returns `None` when no qualifying sentence mentions any food word.
pub fn extract_general_context(text: &str, max_len: usize) -> Option<String> {
    let mut best: Option<&str> = None;
    let mut best_score = 0usize;

    for (s, e) in sentence_spans(text) {
        let sentence = &text[s..e];
        let len = sentence.chars().count();
        if len < MIN_CONTEXT_SENTENCE || len > max_len {
            continue;
        }
        let lower = sentence.to_lowercase();
        let score: usize = FOOD_CONTEXT_WORDS
            .iter()
            .map(|w| lower.matches(w).count())
            .sum();
        if score > best_score {
            best_score = score;
            best = Some(sentence);
        }
    }

    best.map(|s| s.trim().to_string())
}
