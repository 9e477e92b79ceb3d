//! Caching layer for remote catalog snapshots.
//!
//! The catalog changes rarely compared to how often plans are requested, so
//! one snapshot is shared by every request until its TTL expires. Concurrent
//! misses are coalesced into a single fetch.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use super::client::CatalogClient;
use super::error::CatalogError;
use super::snapshot::CatalogSnapshot;

/// Configuration for the snapshot cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a fetched snapshot stays valid.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
        }
    }
}

/// Catalog client with a single-entry TTL cache in front of it.
pub struct CachedCatalog {
    client: CatalogClient,
    snapshots: MokaCache<(), Arc<CatalogSnapshot>>,
}

impl CachedCatalog {
    /// Wrap a client with the given cache configuration.
    pub fn new(client: CatalogClient, config: &CacheConfig) -> Self {
        let snapshots = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(1)
            .build();

        Self { client, snapshots }
    }

    /// Get the current snapshot, fetching it if the cached one has expired.
    pub async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        self.snapshots
            .try_get_with((), async {
                let snapshot = self.client.fetch_snapshot().await?;
                tracing::info!(
                    destinations = snapshot.destinations.len(),
                    places = snapshot.places.len(),
                    reviews = snapshot.reviews.len(),
                    "refreshed catalog snapshot"
                );
                Ok::<_, CatalogError>(Arc::new(snapshot))
            })
            .await
            .map_err(|e| CatalogError::Cache {
                message: e.to_string(),
            })
    }

    /// Drop the cached snapshot so the next call refetches.
    pub async fn invalidate(&self) {
        self.snapshots.invalidate(&()).await;
    }
}
