//! Review provider client.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use menumatch_core::{Error, Result, Review};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where reviews come from. The pipeline is generic over this so tests can
/// substitute a canned source.
pub trait ReviewSource {
    /// Fetch the reviews for one place. Implementations may return an empty
    /// list when the provider has nothing; the engine treats that as "no
    /// matches possible".
    fn fetch_reviews(
        &self,
        place_ref: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Review>>> + Send;
}

/// Client for a Places-style details endpoint.
pub struct PlacesClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl PlacesClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different endpoint (tests, proxies).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }
}

impl ReviewSource for PlacesClient {
    async fn fetch_reviews(&self, place_ref: &str) -> Result<Vec<Review>> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("place_id", place_ref),
                ("fields", "reviews"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::Http(e.to_string()))?;

        let details: DetailsResponse = response
            .json()
            .await
            .map_err(|e| Error::Provider(format!("bad details payload: {e}")))?;

        if let Some(status) = details.status.as_deref() {
            if status != "OK" {
                warn!("Provider returned status {} for {}", status, place_ref);
                return Ok(Vec::new());
            }
        }

        let reviews = map_reviews(details.result.map(|r| r.reviews).unwrap_or_default());
        debug!("Fetched {} reviews for {}", reviews.len(), place_ref);
        Ok(reviews)
    }
}

/// Map provider review objects into the engine's `Review`. Missing fields
/// default rather than error; the pass guards drop unusable reviews later.
fn map_reviews(provider_reviews: Vec<ProviderReview>) -> Vec<Review> {
    provider_reviews
        .into_iter()
        .map(|r| Review {
            text: r.text,
            author: r.author_name,
            rating: r.rating,
            time_label: r.relative_time_description,
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    result: Option<DetailsResult>,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResult {
    #[serde(default)]
    reviews: Vec<ProviderReview>,
}

#[derive(Debug, Deserialize)]
struct ProviderReview {
    #[serde(default)]
    text: String,
    #[serde(default)]
    author_name: String,
    #[serde(default)]
    rating: u8,
    #[serde(default)]
    relative_time_description: String,
}
