//! MenuMatch Engine — the review-to-dish matching core.
//!
//! Everything in this crate is pure and synchronous: term generation from
//! dish names, sentence-aware snippet extraction, the three-pass matcher,
//! match selection, and the star-rating mapper. I/O lives in the boundary
//! crates; an empty review list simply produces no matches here.

pub mod context;
pub mod passes;
pub mod rating;
pub mod select;
pub mod snippet;
pub mod terms;
pub mod vocab;

pub use context::extract_general_context;
pub use passes::match_reviews_to_dishes;
pub use rating::rating_to_ten_point;
pub use select::select_top_matches;
pub use snippet::{extract_snippet, SNIPPET_MAX};
pub use terms::generate_terms;
