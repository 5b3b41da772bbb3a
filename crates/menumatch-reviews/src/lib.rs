//! MenuMatch Reviews — the review-provider boundary.
//!
//! `ReviewSource` abstracts where reviews come from; `PlacesClient` is the
//! production implementation against a Places-style details endpoint.

pub mod client;

pub use client::{PlacesClient, ReviewSource};
