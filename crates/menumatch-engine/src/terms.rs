//! Search term generation from dish names.

use menumatch_core::SearchTermSet;

use crate::vocab::{DESCRIPTOR_RE, PAREN_RE, STOP_WORDS};

/// Minimum length for a derived (non-verbatim) term.
const MIN_DERIVED_TERM_LEN: usize = 3;

/// Minimum word length for a pass-2 keyword candidate.
const MIN_KEYWORD_LEN: usize = 5;

/// Derive the lexical search terms and long keywords for a dish name.
///
/// Terms come out in generation order: verbatim name, parenthetical-stripped
/// name, descriptor-stripped name, then the last-2 and last-3 word joins.
/// Pass 1 iterates in this order and the first matching term wins, so the
/// order is part of the contract. Pure and deterministic.
pub fn generate_terms(dish_name: &str) -> SearchTermSet {
    let name = dish_name.to_lowercase();
    let mut terms: Vec<String> = Vec::new();
    push_term(&mut terms, name.clone());

    let no_paren = PAREN_RE.replace_all(&name, "").trim().to_string();
    if no_paren != name && no_paren.chars().count() > MIN_DERIVED_TERM_LEN {
        push_term(&mut terms, no_paren.clone());
    }

    let stripped = DESCRIPTOR_RE.replace(&no_paren, "").trim().to_string();
    if stripped != name && stripped.chars().count() > MIN_DERIVED_TERM_LEN {
        push_term(&mut terms, stripped);
    }

    let words: Vec<&str> = no_paren
        .split_whitespace()
        .filter(|w| w.chars().count() > 2 && !STOP_WORDS.contains(w))
        .collect();

    if words.len() >= 2 {
        push_term(&mut terms, words[words.len() - 2..].join(" "));
    }
    if words.len() >= 3 {
        push_term(&mut terms, words[words.len() - 3..].join(" "));
    }

    let keywords: Vec<String> = words
        .iter()
        .filter(|w| w.chars().count() >= MIN_KEYWORD_LEN)
        .map(|w| w.to_string())
        .collect();

    SearchTermSet { terms, keywords }
}

fn push_term(terms: &mut Vec<String>, term: String) {
    if !term.is_empty() && !terms.contains(&term) {
        terms.push(term);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim_term_always_first() {
        let set = generate_terms("Lobster Roll");
        assert_eq!(set.terms[0], "lobster roll");
    }

    #[test]
    fn test_parenthetical_stripped() {
        let set = generate_terms("Clam Chowder (Bowl)");
        assert_eq!(set.terms[0], "clam chowder (bowl)");
        assert!(set.terms.contains(&"clam chowder".to_string()));
    }

    #[test]
    fn test_leading_descriptor_stripped() {
        let set = generate_terms("New England Clam Chowder");
        assert!(set.terms.contains(&"clam chowder".to_string()));
        // Single-word member of a listed multi-word phrase is not stripped.
        let set = generate_terms("Seared Scallops");
        assert!(!set.terms.contains(&"scallops".to_string()));
        assert_eq!(set.terms, vec!["seared scallops".to_string()]);
    }

    #[test]
    fn test_last_word_joins_skip_stop_words() {
        let set = generate_terms("Catch of the Day with Fries");
        // "of" (≤2 chars), "the" and "with" (stop words) drop out.
        assert!(set.terms.contains(&"day fries".to_string()));
        assert!(set.terms.contains(&"catch day fries".to_string()));
    }

    #[test]
    fn test_keywords_are_long_words() {
        let set = generate_terms("Grilled Swordfish with Rice");
        assert_eq!(set.keywords, vec!["grilled", "swordfish"]);
    }

    #[test]
    fn test_no_duplicate_terms() {
        let set = generate_terms("Chowder");
        assert_eq!(set.terms, vec!["chowder".to_string()]);
    }
}
