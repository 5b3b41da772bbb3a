//! Static vocabulary tables shared by the matching passes.
//!
//! These are versioned lookup data, kept out of the matcher logic so they
//! can be extended without touching pass code.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Words dropped when splitting a dish name into words.
pub const STOP_WORDS: &[&str] = &["the", "and", "with", "our", "a"];

/// Leading descriptor phrases stripped from dish names to derive a shorter
/// search term. Only a literal match at the very start of the name counts;
/// multi-word phrases must appear before their single-word prefixes so the
/// alternation prefers the longer strip.
pub const LEADING_DESCRIPTORS: &[&str] = &[
    "new england",
    "pan seared",
    "pan-seared",
    "wood grilled",
    "wood fired",
    "house made",
    "hand cut",
    "grilled",
    "blackened",
    "crispy",
    "fried",
    "baked",
    "roasted",
    "house",
    "classic",
    "fresh",
    "creamy",
    "homemade",
    "jumbo",
    "traditional",
];

/// Anchored regex stripping one leading descriptor phrase plus the space
/// after it.
pub static DESCRIPTOR_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = LEADING_DESCRIPTORS
        .iter()
        .map(|d| regex::escape(d))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("^(?:{alternation})\\s+")).unwrap()
});

/// Parenthetical content in a dish name, e.g. the "(Bowl)" in
/// "Clam Chowder (Bowl)".
pub static PAREN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\([^)]*\)").unwrap());

/// Food-context vocabulary used to score sentences in the general-context
/// extractor and to gate pass 3.
pub const FOOD_CONTEXT_WORDS: &[&str] = &[
    "food",
    "dish",
    "meal",
    "delicious",
    "tasty",
    "amazing",
    "incredible",
    "fresh",
    "cooked",
    "flavor",
    "order",
    "menu",
    "appetizer",
    "entree",
];

/// Keyword map for pass 2: entry key → mention variants, in declaration
/// order. A dish is eligible for an entry when its name carries the key or
/// a variant; the review must mention a variant on a word boundary.
pub const KEYWORD_MAP: &[(&str, &[&str])] = &[
    ("lobster roll", &["lobster roll", "lobster salad roll"]),
    ("chowder", &["chowder", "clam chowder"]),
    ("scallop", &["scallop", "scallops", "seared scallops"]),
    ("oyster", &["oyster", "oysters"]),
    ("calamari", &["calamari"]),
    ("fish and chips", &["fish and chips", "fish & chips"]),
    ("salmon", &["salmon"]),
    ("shrimp", &["shrimp"]),
    ("crab", &["crab", "crab cake", "crab cakes"]),
    ("mussel", &["mussels", "mussel"]),
    ("burger", &["burger", "cheeseburger"]),
    ("taco", &["taco", "tacos", "fish taco"]),
    ("steak", &["steak", "ribeye", "filet"]),
    ("pasta", &["pasta", "linguine", "fettuccine"]),
    ("pizza", &["pizza"]),
    ("salad", &["salad", "caesar salad"]),
    ("sandwich", &["sandwich"]),
    ("dessert", &["dessert", "cheesecake", "sundae"]),
];

/// Case-insensitive word-boundary test for a literal term. A term "rice"
/// must not hit inside "price".
pub fn word_boundary_hit(text: &str, term: &str) -> bool {
    let pattern = format!(r"\b{}\b", regex::escape(term));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

/// First case-insensitive occurrence of a literal term, as a byte range in
/// the original text.
pub fn find_term(text: &str, term: &str) -> Option<(usize, usize)> {
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .ok()?
        .find(text)
        .map(|m| (m.start(), m.end()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_boundary_rejects_partial_words() {
        assert!(!word_boundary_hit("the price was fair", "rice"));
        assert!(word_boundary_hit("the rice was fluffy", "rice"));
        assert!(word_boundary_hit("Great RICE here", "rice"));
    }

    #[test]
    fn test_word_boundary_multi_word_term() {
        assert!(word_boundary_hit("best clam chowder in town", "clam chowder"));
        assert!(!word_boundary_hit("clam chowderfest", "clam chowder"));
    }

    #[test]
    fn test_descriptor_strip_is_anchored() {
        assert_eq!(DESCRIPTOR_RE.replace("grilled salmon", ""), "salmon");
        // Mid-name occurrences are untouched.
        assert_eq!(
            DESCRIPTOR_RE.replace("salmon grilled daily", ""),
            "salmon grilled daily"
        );
        // "seared" alone is not a listed phrase.
        assert_eq!(
            DESCRIPTOR_RE.replace("seared scallops", ""),
            "seared scallops"
        );
        assert_eq!(DESCRIPTOR_RE.replace("pan seared scallops", ""), "scallops");
    }

    #[test]
    fn test_find_term_case_insensitive() {
        assert_eq!(find_term("The Lobster Roll rocks", "lobster roll"), Some((4, 16)));
        assert_eq!(find_term("no shellfish here", "lobster"), None);
    }
}
