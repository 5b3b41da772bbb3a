//! MenuMatch Runtime — sequential per-restaurant seeding pipeline.

pub mod pipeline;

pub use pipeline::{Pipeline, SeedReport};
