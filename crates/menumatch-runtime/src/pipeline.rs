//! The seeding pipeline: fetch reviews, match, select, persist quotes.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{info, warn};
use uuid::Uuid;

use menumatch_core::{Dish, Match, Restaurant, Result};
use menumatch_engine::{match_reviews_to_dishes, rating_to_ten_point, select_top_matches};
use menumatch_reviews::ReviewSource;
use menumatch_store::{CorpusStore, QuoteRow};

/// Summary of one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    pub restaurants: usize,
    pub reviews_fetched: usize,
    pub raw_matches: usize,
    pub dishes_quoted: usize,
    pub quotes_written: usize,
}

/// Sequential per-restaurant pipeline. Restaurants are processed one at a
/// time with a fixed delay in between to respect the provider's rate
/// limit; matching itself is pure, so re-running against the same inputs
/// recomputes the same matches.
pub struct Pipeline {
    quote_cap: usize,
    fetch_delay: Duration,
}

impl Pipeline {
    pub fn new(quote_cap: usize, fetch_delay: Duration) -> Self {
        Self {
            quote_cap,
            fetch_delay,
        }
    }

    /// Run the full pipeline: load the corpus from `store`, collect raw
    /// matches across all restaurants, select the top quotes per dish, and
    /// persist them (full regenerate).
    pub async fn run<S: ReviewSource>(&self, store: &CorpusStore, source: &S) -> Result<SeedReport> {
        let restaurants = store.load_restaurants()?;
        let dishes_by_restaurant = store.load_dishes_grouped()?;

        let mut report = SeedReport::default();
        let all_matches = self
            .collect_matches(source, &restaurants, &dishes_by_restaurant, &mut report)
            .await?;

        let selected = select_top_matches(&all_matches, self.quote_cap);
        let rows = to_quote_rows(&selected);

        report.dishes_quoted = selected.len();
        report.quotes_written = store.replace_quotes(&rows)?;
        info!(
            "Seeding complete: {} restaurants, {} reviews, {} raw matches, {} quotes for {} dishes",
            report.restaurants,
            report.reviews_fetched,
            report.raw_matches,
            report.quotes_written,
            report.dishes_quoted
        );
        Ok(report)
    }

    /// Fetch and match each restaurant in turn, accumulating raw matches.
    /// Provider failures downgrade to an empty review list; they never
    /// reach the engine as errors.
    pub async fn collect_matches<S: ReviewSource>(
        &self,
        source: &S,
        restaurants: &[Restaurant],
        dishes_by_restaurant: &HashMap<Uuid, Vec<Dish>>,
        report: &mut SeedReport,
    ) -> Result<Vec<Match>> {
        let mut all_matches = Vec::new();

        for (i, restaurant) in restaurants.iter().enumerate() {
            let dishes = match dishes_by_restaurant.get(&restaurant.id) {
                Some(d) if !d.is_empty() => d,
                _ => {
                    info!("No dishes for {}, skipping", restaurant.name);
                    continue;
                }
            };

            let reviews = match source.fetch_reviews(&restaurant.place_ref).await {
                Ok(reviews) => reviews,
                Err(e) => {
                    warn!("Review fetch failed for {}: {}", restaurant.name, e);
                    Vec::new()
                }
            };

            report.restaurants += 1;
            report.reviews_fetched += reviews.len();

            let matches = match_reviews_to_dishes(&reviews, dishes);
            info!(
                "{}: {} reviews, {} raw matches",
                restaurant.name,
                reviews.len(),
                matches.len()
            );
            report.raw_matches += matches.len();
            all_matches.extend(matches);

            // Provider rate limit: pause between restaurants, not after the last.
            if i + 1 < restaurants.len() && !self.fetch_delay.is_zero() {
                tokio::time::sleep(self.fetch_delay).await;
            }
        }

        Ok(all_matches)
    }
}

/// Flatten selected matches into persistable rows, mapping star ratings
/// onto the 0–10 scale at emission time.
fn to_quote_rows(selected: &HashMap<Uuid, Vec<Match>>) -> Vec<QuoteRow> {
    let mut rows: Vec<QuoteRow> = selected
        .values()
        .flatten()
        .map(|m| QuoteRow {
            dish_id: m.dish_id,
            dish_name: m.dish_name.clone(),
            snippet: m.review_snippet.clone(),
            author: m.author.clone(),
            rating10: rating_to_ten_point(m.rating),
            source_term: m.source_term.clone(),
            match_type: m.match_type,
        })
        .collect();
    // HashMap iteration order is arbitrary; keep the artifact deterministic.
    rows.sort_by(|a, b| a.dish_id.cmp(&b.dish_id));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use menumatch_core::{Error, Review};

    /// Canned source: returns fixed reviews per place ref, or an error.
    struct StubSource {
        by_place: HashMap<String, Vec<Review>>,
        fail_places: Vec<String>,
    }

    impl ReviewSource for StubSource {
        async fn fetch_reviews(&self, place_ref: &str) -> Result<Vec<Review>> {
            if self.fail_places.iter().any(|p| p == place_ref) {
                return Err(Error::Provider("boom".into()));
            }
            Ok(self.by_place.get(place_ref).cloned().unwrap_or_default())
        }
    }

    fn review(text: &str, rating: u8) -> Review {
        Review {
            text: text.to_string(),
            author: "Pat".to_string(),
            rating,
            time_label: "a month ago".to_string(),
        }
    }

    fn corpus(store: &CorpusStore) -> (Restaurant, Vec<Dish>) {
        let restaurant = Restaurant {
            id: Uuid::new_v4(),
            name: "The Wharf".to_string(),
            place_ref: "place-1".to_string(),
        };
        store.add_restaurant(&restaurant).unwrap();
        let dishes: Vec<Dish> = ["Lobster Roll", "Clam Chowder"]
            .iter()
            .map(|name| {
                let dish = Dish {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                    category: "Mains".to_string(),
                    restaurant_id: restaurant.id,
                };
                store.add_dish(&dish).unwrap();
                dish
            })
            .collect();
        (restaurant, dishes)
    }

    #[tokio::test]
    async fn test_run_writes_selected_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let store = CorpusStore::open(dir.path().join("corpus.db")).unwrap();
        let (_, dishes) = corpus(&store);

        let mut by_place = HashMap::new();
        by_place.insert(
            "place-1".to_string(),
            vec![
                review("The lobster roll was the best thing on the menu.", 5),
                review("Their clam chowder warms you right up after the beach.", 4),
            ],
        );
        let source = StubSource {
            by_place,
            fail_places: vec![],
        };

        let pipeline = Pipeline::new(3, Duration::ZERO);
        let report = pipeline.run(&store, &source).await.unwrap();

        assert_eq!(report.restaurants, 1);
        assert_eq!(report.reviews_fetched, 2);
        assert_eq!(report.quotes_written, 2);
        assert_eq!(store.count_quotes().unwrap(), 2);

        let quotes = store.load_quotes_for_dish(dishes[0].id).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].rating10, 9.0);
    }

    #[tokio::test]
    async fn test_fetch_failure_downgrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CorpusStore::open(dir.path().join("corpus.db")).unwrap();
        corpus(&store);

        let source = StubSource {
            by_place: HashMap::new(),
            fail_places: vec!["place-1".to_string()],
        };

        let pipeline = Pipeline::new(3, Duration::ZERO);
        let report = pipeline.run(&store, &source).await.unwrap();

        assert_eq!(report.restaurants, 1);
        assert_eq!(report.reviews_fetched, 0);
        assert_eq!(report.raw_matches, 0);
        assert_eq!(store.count_quotes().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_rerun_regenerates_instead_of_merging() {
        let dir = tempfile::tempdir().unwrap();
        let store = CorpusStore::open(dir.path().join("corpus.db")).unwrap();
        corpus(&store);

        let mut by_place = HashMap::new();
        by_place.insert(
            "place-1".to_string(),
            vec![review("The lobster roll was the best thing on the menu.", 5)],
        );
        let source = StubSource {
            by_place,
            fail_places: vec![],
        };

        let pipeline = Pipeline::new(3, Duration::ZERO);
        let first = pipeline.run(&store, &source).await.unwrap();
        let second = pipeline.run(&store, &source).await.unwrap();

        assert_eq!(first.quotes_written, second.quotes_written);
        assert_eq!(store.count_quotes().unwrap() as usize, second.quotes_written);
    }
}
