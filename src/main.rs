//! One-shot batch job: scrape the four divisions, geocode their
//! grounds, and write the feature collection plus the coordinate cache.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use groundmap::cache::CoordinateCache;
use groundmap::geocode::{Nominatim, Resolver};
use groundmap::pipeline::build_collection;
use groundmap::tables::TableScraper;
use groundmap::leagues;

const USER_AGENT: &str = "english_football_map_2024/25";

#[derive(Parser, Debug)]
#[command(name = "groundmap")]
#[command(about = "Build a GeoJSON map of English league football grounds")]
struct Args {
    /// Output feature collection file
    #[arg(long, default_value = "english_football_2024_25.geojson")]
    output: PathBuf,

    /// Coordinate cache file
    #[arg(long, default_value = "stadiums_cache_all_leagues.json")]
    cache_file: PathBuf,

    /// Minimum delay between geocoding requests, in milliseconds
    #[arg(long, default_value = "1000")]
    min_delay_ms: u64,

    /// Per-request network timeout, in seconds
    #[arg(long, default_value = "15")]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let timeout = Duration::from_secs(args.timeout_secs);

    let cache = CoordinateCache::load(&args.cache_file)?;
    info!("Loaded {} cached coordinates", cache.len());

    let scraper = TableScraper::new(USER_AGENT, timeout)?;
    let provider = Nominatim::new(USER_AGENT, timeout)?;
    let mut resolver = Resolver::new(
        provider,
        cache,
        Duration::from_millis(args.min_delay_ms),
    );

    let collection = build_collection(leagues::divisions(), &scraper, &mut resolver).await;
    let feature_count = collection.features.len();

    let encoded = serde_json::to_string_pretty(&collection)?;
    std::fs::write(&args.output, encoded)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    let cache = resolver.into_cache();
    info!("Persisting {} cached coordinates", cache.len());
    cache.save(&args.cache_file)?;

    info!(
        "Done. Wrote {} features to {}",
        feature_count,
        args.output.display()
    );
    Ok(())
}
