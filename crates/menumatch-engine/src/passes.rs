//! The three ordered matching passes for one restaurant.

use std::collections::HashSet;

use tracing::debug;
use uuid::Uuid;

use menumatch_core::{Dish, Match, MatchType, Review, SearchTermSet};

use crate::context::extract_general_context;
use crate::snippet::{extract_snippet, SNIPPET_MAX};
use crate::terms::generate_terms;
use crate::vocab::{word_boundary_hit, FOOD_CONTEXT_WORDS, KEYWORD_MAP};

const NAME_MIN_REVIEW_LEN: usize = 15;
const KEYWORD_MIN_REVIEW_LEN: usize = 20;
const GENERAL_MIN_REVIEW_LEN: usize = 30;

const NAME_MIN_SNIPPET_LEN: usize = 15;
const KEYWORD_MIN_SNIPPET_LEN: usize = 15;
const GENERAL_MIN_SNIPPET_LEN: usize = 20;

const KEYWORD_MIN_RATING: u8 = 4;
const GENERAL_EXACT_RATING: u8 = 5;

/// Minimum term length tested in pass 1.
const NAME_MIN_TERM_LEN: usize = 3;

/// Run passes 1–3 in order against one restaurant's reviews and dishes,
/// returning all raw matches before cross-restaurant selection.
///
/// The matched-dish registry is scoped to this call: pass 1 ignores it (a
/// dish can collect several name matches across reviews), passes 2 and 3
/// only visit dishes it does not yet contain. Pass 3 depends on the
/// original dish ordering, so `dishes` must arrive in menu order.
pub fn match_reviews_to_dishes(reviews: &[Review], dishes: &[Dish]) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut registry: HashSet<Uuid> = HashSet::new();

    let term_sets: Vec<SearchTermSet> = dishes.iter().map(|d| generate_terms(&d.name)).collect();

    pass_name(reviews, dishes, &term_sets, &mut matches, &mut registry);
    pass_keyword(reviews, dishes, &term_sets, &mut matches, &mut registry);
    pass_general(reviews, dishes, &mut matches, &mut registry);

    debug!(
        "Matched {} reviews against {} dishes: {} raw matches, {} dishes covered",
        reviews.len(),
        dishes.len(),
        matches.len(),
        registry.len()
    );
    matches
}

/// Pass 1 — dish-name terms on word boundaries. Not self-gated.
fn pass_name(
    reviews: &[Review],
    dishes: &[Dish],
    term_sets: &[SearchTermSet],
    matches: &mut Vec<Match>,
    registry: &mut HashSet<Uuid>,
) {
    for review in reviews {
        if review.text.chars().count() < NAME_MIN_REVIEW_LEN {
            continue;
        }
        for (dish, terms) in dishes.iter().zip(term_sets) {
            for term in &terms.terms {
                if term.chars().count() < NAME_MIN_TERM_LEN {
                    continue;
                }
                if !word_boundary_hit(&review.text, term) {
                    continue;
                }
                // First matching term decides this dish-review pair, whether
                // or not its snippet survives the floor.
                if let Some(snippet) = extract_snippet(&review.text, term, SNIPPET_MAX) {
                    if snippet.chars().count() >= NAME_MIN_SNIPPET_LEN {
                        matches.push(Match {
                            dish_id: dish.id,
                            dish_name: dish.name.clone(),
                            review_snippet: snippet,
                            author: review.author.clone(),
                            rating: review.rating,
                            source_term: term.clone(),
                            match_type: MatchType::Name,
                        });
                        registry.insert(dish.id);
                    }
                }
                break;
            }
        }
    }
}

/// Pass 2 — category keywords in well-rated reviews, unmatched dishes only.
fn pass_keyword(
    reviews: &[Review],
    dishes: &[Dish],
    term_sets: &[SearchTermSet],
    matches: &mut Vec<Match>,
    registry: &mut HashSet<Uuid>,
) {
    for review in reviews {
        if review.text.chars().count() < KEYWORD_MIN_REVIEW_LEN
            || review.rating < KEYWORD_MIN_RATING
        {
            continue;
        }
        let text_lower = review.text.to_lowercase();

        for (dish, terms) in dishes.iter().zip(term_sets) {
            if registry.contains(&dish.id) {
                continue;
            }
            let name_lower = dish.name.to_lowercase();

            for &(key, variants) in KEYWORD_MAP {
                let dish_has_entry = terms.keywords.iter().any(|k| k.contains(key))
                    || variants.iter().any(|v| name_lower.contains(v))
                    || name_lower.contains(key);
                if !dish_has_entry {
                    continue;
                }
                if !variants.iter().any(|v| word_boundary_hit(&review.text, v)) {
                    continue;
                }

                let source_term = variants
                    .iter()
                    .find(|v| text_lower.contains(**v))
                    .copied()
                    .unwrap_or(key)
                    .to_string();

                if let Some(snippet) = extract_snippet(&review.text, &source_term, SNIPPET_MAX) {
                    if snippet.chars().count() >= KEYWORD_MIN_SNIPPET_LEN {
                        matches.push(Match {
                            dish_id: dish.id,
                            dish_name: dish.name.clone(),
                            review_snippet: snippet,
                            author: review.author.clone(),
                            rating: review.rating,
                            source_term,
                            match_type: MatchType::Keyword,
                        });
                        registry.insert(dish.id);
                    }
                }
                break;
            }
        }
    }
}

/// Pass 3 — assign a glowing food-positive review to the first still
/// unmatched dish. At most one assignment per review.
fn pass_general(
    reviews: &[Review],
    dishes: &[Dish],
    matches: &mut Vec<Match>,
    registry: &mut HashSet<Uuid>,
) {
    for review in reviews {
        if review.text.chars().count() < GENERAL_MIN_REVIEW_LEN
            || review.rating != GENERAL_EXACT_RATING
        {
            continue;
        }
        let text_lower = review.text.to_lowercase();
        let Some(food_word) = FOOD_CONTEXT_WORDS.iter().find(|w| text_lower.contains(**w))
        else {
            continue;
        };
        let Some(dish) = dishes.iter().find(|d| !registry.contains(&d.id)) else {
            continue;
        };
        if let Some(snippet) = extract_general_context(&review.text, SNIPPET_MAX) {
            if snippet.chars().count() >= GENERAL_MIN_SNIPPET_LEN {
                matches.push(Match {
                    dish_id: dish.id,
                    dish_name: dish.name.clone(),
                    review_snippet: snippet,
                    author: review.author.clone(),
                    rating: review.rating,
                    source_term: food_word.to_string(),
                    match_type: MatchType::General,
                });
                registry.insert(dish.id);
            }
        }
    }
}
