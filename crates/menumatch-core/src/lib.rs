//! MenuMatch Core — shared types, errors, configuration.

pub mod config;
pub mod error;
pub mod types;

pub use config::MenuMatchConfig;
pub use error::{Error, Result};
pub use types::{Dish, Match, MatchType, Restaurant, Review, SearchTermSet};
