//! Coordinate resolution through the cache with a rate-limited
//! Nominatim fallback.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::cache::CoordinateCache;

const NOMINATIM_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

/// Forward-geocoding backend: free-text query to an optional
/// (longitude, latitude).
pub trait GeocodeProvider {
    async fn geocode(&self, query: &str) -> Result<Option<(f64, f64)>>;
}

/// Nominatim search client.
pub struct Nominatim {
    client: reqwest::Client,
}

/// Nominatim returns lat/lon as JSON strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lon: String,
    lat: String,
}

impl Nominatim {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

impl GeocodeProvider for Nominatim {
    async fn geocode(&self, query: &str) -> Result<Option<(f64, f64)>> {
        let results: Vec<SearchResult> = self
            .client
            .get(NOMINATIM_ENDPOINT)
            .query(&[("q", query), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(first) = results.first() else {
            return Ok(None);
        };
        let lon: f64 = first.lon.parse().context("Unparsable longitude")?;
        let lat: f64 = first.lat.parse().context("Unparsable latitude")?;
        Ok(Some((lon, lat)))
    }
}

/// Resolves stadium coordinates, consulting the cache before the
/// provider and throttling provider calls process-wide.
pub struct Resolver<P> {
    provider: P,
    cache: CoordinateCache,
    min_delay: Duration,
    last_request: Option<Instant>,
}

impl<P: GeocodeProvider> Resolver<P> {
    pub fn new(provider: P, cache: CoordinateCache, min_delay: Duration) -> Self {
        Self {
            provider,
            cache,
            min_delay,
            last_request: None,
        }
    }

    /// Hand the cache back for persistence at the end of the run.
    pub fn into_cache(self) -> CoordinateCache {
        self.cache
    }

    /// Resolve one stadium. A cache hit returns immediately; a miss
    /// queries the provider for `"<stadium>, UK"`. Failures are logged
    /// and yield `None` without caching, so they are retried on the
    /// next run.
    pub async fn resolve(&mut self, league: &str, team: &str, stadium: &str) -> Option<(f64, f64)> {
        if let Some(coordinates) = self.cache.get(league, team, stadium) {
            debug!("Cache hit for {stadium}");
            return Some(coordinates);
        }

        self.throttle().await;

        let query = format!("{stadium}, UK");
        match self.provider.geocode(&query).await {
            Ok(Some(coordinates)) => {
                info!(
                    "Resolved {} to ({}, {})",
                    stadium, coordinates.0, coordinates.1
                );
                self.cache.insert(league, team, stadium, coordinates);
                Some(coordinates)
            }
            Ok(None) => {
                warn!("No geocoding match for {stadium}");
                None
            }
            Err(e) => {
                warn!("Geocoding failed for {stadium}: {e}");
                None
            }
        }
    }

    /// Keep consecutive provider calls at least `min_delay` apart.
    async fn throttle(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_delay {
                tokio::time::sleep(self.min_delay - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct StubProvider {
        result: Option<(f64, f64)>,
        fail: bool,
        calls: Cell<usize>,
    }

    impl StubProvider {
        fn returning(result: Option<(f64, f64)>) -> Self {
            Self {
                result,
                fail: false,
                calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                result: None,
                fail: true,
                calls: Cell::new(0),
            }
        }
    }

    impl GeocodeProvider for StubProvider {
        async fn geocode(&self, _query: &str) -> Result<Option<(f64, f64)>> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                anyhow::bail!("provider unavailable");
            }
            Ok(self.result)
        }
    }

    fn resolver(provider: StubProvider) -> Resolver<StubProvider> {
        Resolver::new(provider, CoordinateCache::default(), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_second_resolve_is_a_cache_hit() {
        let mut resolver = resolver(StubProvider::returning(Some((-0.1086, 51.5549))));

        let first = resolver
            .resolve("Premier League", "Arsenal", "Emirates Stadium")
            .await;
        let second = resolver
            .resolve("Premier League", "Arsenal", "Emirates Stadium")
            .await;

        assert_eq!(first, Some((-0.1086, 51.5549)));
        assert_eq!(second, first);
        assert_eq!(resolver.provider.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_preloaded_cache_skips_provider() {
        let mut cache = CoordinateCache::default();
        cache.insert("Premier League", "Arsenal", "Emirates Stadium", (-0.1086, 51.5549));
        let mut resolver = Resolver::new(
            StubProvider::returning(Some((9.9, 9.9))),
            cache,
            Duration::ZERO,
        );

        let resolved = resolver
            .resolve("Premier League", "Arsenal", "Emirates Stadium")
            .await;

        assert_eq!(resolved, Some((-0.1086, 51.5549)));
        assert_eq!(resolver.provider.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_no_match_is_not_cached() {
        let mut resolver = resolver(StubProvider::returning(None));

        let first = resolver
            .resolve("EFL League Two", "Barrow", "Holker Street")
            .await;
        let second = resolver
            .resolve("EFL League Two", "Barrow", "Holker Street")
            .await;

        assert_eq!(first, None);
        assert_eq!(second, None);
        // Both calls went to the provider; failures are never cached.
        assert_eq!(resolver.provider.calls.get(), 2);
        assert!(resolver.into_cache().is_empty());
    }

    #[tokio::test]
    async fn test_provider_error_yields_absent() {
        let mut resolver = resolver(StubProvider::failing());

        let resolved = resolver
            .resolve("EFL League One", "Wigan Athletic", "DW Stadium")
            .await;

        assert_eq!(resolved, None);
        assert!(resolver.into_cache().is_empty());
    }

    #[tokio::test]
    async fn test_differently_cased_names_are_distinct_entries() {
        let mut resolver = resolver(StubProvider::returning(Some((1.0, 2.0))));

        resolver
            .resolve("Premier League", "Arsenal", "Emirates Stadium")
            .await;
        resolver
            .resolve("Premier League", "Arsenal", "emirates stadium")
            .await;

        assert_eq!(resolver.provider.calls.get(), 2);
    }
}
