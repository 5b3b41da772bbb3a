//! MenuMatch — seed menu dishes with authentic review quotes.

use std::path::PathBuf;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use menumatch_core::MenuMatchConfig;
use menumatch_reviews::PlacesClient;
use menumatch_runtime::Pipeline;
use menumatch_store::CorpusStore;

mod demo;

fn resolve_db_path() -> PathBuf {
    std::env::var("MENUMATCH_DB_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/menumatch.db"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "seed-demo" => {
                let store = CorpusStore::open(resolve_db_path())?;
                let (restaurants, dishes) = demo::seed_demo_corpus(&store)?;
                info!("Demo corpus ready: {} restaurants, {} dishes", restaurants, dishes);
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("MenuMatch — seed menu dishes with authentic review quotes");
                println!();
                println!("Usage: menumatch [command]");
                println!();
                println!("Commands:");
                println!("  (none)       Fetch reviews and regenerate dish quotes");
                println!("  seed-demo    Load a small demo corpus into the database");
                println!();
                println!("Environment:");
                println!("  PLACES_API_KEY            Review provider key (required for a run)");
                println!("  MENUMATCH_DB_PATH         Database path (default data/menumatch.db)");
                println!("  MENUMATCH_QUOTE_CAP       Quotes kept per dish (default 3)");
                println!("  MENUMATCH_FETCH_DELAY_MS  Delay between restaurants (default 100)");
                return Ok(());
            }
            other => {
                eprintln!("Unknown command: {other} (try --help)");
                std::process::exit(1);
            }
        }
    }

    let config = MenuMatchConfig::from_env()?;
    let store = CorpusStore::open(&config.db_path)?;
    let client = PlacesClient::new(config.places_api_key.as_str())?;

    let pipeline = Pipeline::new(config.quote_cap, Duration::from_millis(config.fetch_delay_ms));
    let report = pipeline.run(&store, &client).await?;

    info!(
        "Done: {} quotes across {} dishes ({} restaurants, {} reviews)",
        report.quotes_written, report.dishes_quoted, report.restaurants, report.reviews_fetched
    );
    Ok(())
}
