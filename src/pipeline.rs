//! One-shot assembly of the full feature collection.
//!
//! Strictly sequential over leagues and rows: the geocoding provider is
//! rate-limited, so there is nothing to gain from parallelism here.

use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::geocode::{GeocodeProvider, Resolver};
use crate::leagues::League;
use crate::models::{Feature, FeatureCollection};
use crate::tables::TeamTableSource;

/// Drive every league through extraction, resolution, and feature
/// construction. A league whose extraction fails contributes zero rows
/// without aborting the rest; a row whose resolution fails is dropped.
pub async fn build_collection<S, P>(
    leagues: &[League],
    source: &S,
    resolver: &mut Resolver<P>,
) -> FeatureCollection
where
    S: TeamTableSource,
    P: GeocodeProvider,
{
    let mut features = Vec::new();

    for league in leagues {
        info!("Scraping team listing for {}", league.name);
        let rows = match source.team_table(league).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Skipping {}: {e:#}", league.name);
                continue;
            }
        };

        info!("Processing {} teams from {}", rows.len(), league.name);
        let pb = ProgressBar::new(rows.len() as u64);
        for row in &rows {
            pb.inc(1);
            let Some(coordinates) = resolver
                .resolve(league.name, &row.team, &row.stadium)
                .await
            else {
                continue;
            };
            features.push(Feature::stadium(
                &row.team,
                league.name,
                &row.stadium,
                league.capacity(&row.stadium),
                coordinates,
            ));
        }
        pb.finish_and_clear();
    }

    FeatureCollection::new(features)
}
