//! Read access to catalog data.

use std::sync::Arc;

use crate::domain::{DestinationId, DestinationReview, PointOfInterest};

use super::cache::CachedCatalog;
use super::error::CatalogError;
use super::snapshot::CatalogSnapshot;

/// Read-only source of the catalog data the planner consumes.
///
/// This abstraction allows the scheduler and ranker to be tested with
/// hand-built data.
pub trait CatalogReader {
    /// All points of interest belonging to any of `ids`, in catalog order.
    fn places_for_destinations(&self, ids: &[DestinationId]) -> Vec<&PointOfInterest>;

    /// Every review joined to the destination of the place it rates.
    fn destination_reviews(&self) -> Vec<DestinationReview>;
}

impl<T: CatalogReader + ?Sized> CatalogReader for Arc<T> {
    fn places_for_destinations(&self, ids: &[DestinationId]) -> Vec<&PointOfInterest> {
        (**self).places_for_destinations(ids)
    }

    fn destination_reviews(&self) -> Vec<DestinationReview> {
        (**self).destination_reviews()
    }
}

/// Where the server gets its catalog snapshots from.
#[derive(Clone)]
pub enum CatalogSource {
    /// A snapshot loaded once at startup.
    Static(Arc<CatalogSnapshot>),

    /// A remote catalog service, cached for a short TTL.
    Remote(Arc<CachedCatalog>),
}

impl CatalogSource {
    /// Get the current snapshot.
    pub async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        match self {
            CatalogSource::Static(snapshot) => Ok(snapshot.clone()),
            CatalogSource::Remote(cached) => cached.snapshot().await,
        }
    }
}

impl From<CatalogSnapshot> for CatalogSource {
    fn from(snapshot: CatalogSnapshot) -> Self {
        CatalogSource::Static(Arc::new(snapshot))
    }
}
