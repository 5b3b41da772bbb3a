//! Store row types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use menumatch_core::MatchType;

/// One selected quote ready to persist, rating already mapped to the 0–10
/// scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRow {
    pub dish_id: Uuid,
    pub dish_name: String,
    pub snippet: String,
    pub author: String,
    pub rating10: f64,
    pub source_term: String,
    pub match_type: MatchType,
}
