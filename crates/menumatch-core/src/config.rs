//! Runtime configuration from environment variables.

use std::path::PathBuf;

/// Top-level MenuMatch configuration.
#[derive(Debug, Clone)]
pub struct MenuMatchConfig {
    /// SQLite database path.
    pub db_path: PathBuf,
    /// Review provider API key.
    pub places_api_key: String,
    /// Maximum quotes kept per dish after selection.
    pub quote_cap: usize,
    /// Delay between per-restaurant review fetches, in milliseconds.
    pub fetch_delay_ms: u64,
}

impl MenuMatchConfig {
    /// Read configuration from the environment, with defaults.
    ///
    /// `PLACES_API_KEY` is required; everything else has a default.
    pub fn from_env() -> crate::Result<Self> {
        let db_path = std::env::var("MENUMATCH_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/menumatch.db"));

        let places_api_key = std::env::var("PLACES_API_KEY")
            .map_err(|_| crate::Error::Config("PLACES_API_KEY not set".into()))?;

        let quote_cap = std::env::var("MENUMATCH_QUOTE_CAP")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let fetch_delay_ms = std::env::var("MENUMATCH_FETCH_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        Ok(Self {
            db_path,
            places_api_key,
            quote_cap,
            fetch_delay_ms,
        })
    }
}
