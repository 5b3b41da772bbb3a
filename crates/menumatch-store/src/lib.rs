//! MenuMatch Store — SQLite corpus of restaurants, dishes, and dish quotes.

pub mod schema;
pub mod sqlite;
pub mod types;

pub use sqlite::CorpusStore;
pub use types::QuoteRow;
