//! Core data model: dishes, reviews, and the matches the engine produces.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A menu dish. Immutable input to the matching engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub restaurant_id: Uuid,
}

/// A restaurant with its external review-provider key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    /// Place reference used to fetch reviews from the provider.
    pub place_ref: String,
}

/// A single fetched review. Immutable input to the matching engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub text: String,
    pub author: String,
    /// 1–5 star rating. Out-of-range values simply fail the pass guards.
    pub rating: u8,
    /// Human-readable recency label from the provider ("a month ago").
    pub time_label: String,
}

/// Lexical variants derived from a dish name.
///
/// `terms` keeps generation order: pass 1 iterates it and the first
/// matching term wins, so order is part of the contract.
#[derive(Debug, Clone, Default)]
pub struct SearchTermSet {
    pub terms: Vec<String>,
    /// Long (≥5 char) single words from the name, used by pass 2.
    pub keywords: Vec<String>,
}

/// How a match was found, in decreasing order of confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// A dish-name term matched on a word boundary.
    Name,
    /// A category keyword matched in a well-rated review.
    Keyword,
    /// A positive review assigned to an otherwise unmatched dish.
    General,
}

impl MatchType {
    /// Sort priority: name before keyword before general.
    pub fn priority(self) -> u8 {
        match self {
            MatchType::Name => 0,
            MatchType::Keyword => 1,
            MatchType::General => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Name => "name",
            MatchType::Keyword => "keyword",
            MatchType::General => "general",
        }
    }
}

impl std::str::FromStr for MatchType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "name" => Ok(MatchType::Name),
            "keyword" => Ok(MatchType::Keyword),
            "general" => Ok(MatchType::General),
            other => Err(format!("unknown match type: {other}")),
        }
    }
}

/// One review snippet matched to one dish. Created only by the pass
/// matcher, never mutated, consumed exactly once by the selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub dish_id: Uuid,
    pub dish_name: String,
    pub review_snippet: String,
    pub author: String,
    pub rating: u8,
    /// The term or keyword that produced the hit.
    pub source_term: String,
    pub match_type: MatchType,
}
