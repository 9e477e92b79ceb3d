//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::CatalogSource;
use crate::planner::{CostEstimator, PlannerConfig};

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Catalog snapshots
    pub catalog: CatalogSource,

    /// Cost estimator used when planning
    pub estimator: Arc<dyn CostEstimator + Send + Sync>,

    /// Scheduler configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        catalog: CatalogSource,
        estimator: Arc<dyn CostEstimator + Send + Sync>,
        config: PlannerConfig,
    ) -> Self {
        Self {
            catalog,
            estimator,
            config: Arc::new(config),
        }
    }
}
