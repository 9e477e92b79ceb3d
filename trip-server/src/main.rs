use std::error::Error;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_server::catalog::{CachedCatalog, CatalogClient, CatalogSource, load_snapshot};
use trip_server::config::{CatalogLocation, ServerConfig};
use trip_server::planner::PlannerConfig;
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = ServerConfig::from_env()?;

    let catalog = match config.catalog {
        CatalogLocation::File(path) => {
            let snapshot = load_snapshot(&path)?;
            CatalogSource::from(snapshot)
        }
        CatalogLocation::Remote(client_config) => {
            info!(url = %client_config.base_url, "using remote catalog");
            let client = CatalogClient::new(client_config)?;
            let cached = CachedCatalog::new(client, &config.cache);

            // Fail fast if the catalog is unreachable
            let snapshot = cached.snapshot().await?;
            info!(
                destinations = snapshot.destinations.len(),
                places = snapshot.places.len(),
                "fetched catalog"
            );
            CatalogSource::Remote(Arc::new(cached))
        }
    };

    let estimator = config.cost_model.estimator();
    info!(cost_model = ?config.cost_model, "cost estimator selected");

    let state = AppState::new(catalog, estimator, PlannerConfig::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Trip planner listening on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET  /health                      - Health check");
    info!("  POST /itineraries/plan            - Plan an itinerary");
    info!("  GET  /destinations/top            - Best-reviewed destinations");
    info!("  GET  /recommendations/categories  - Place categories");
    info!("  POST /recommendations/places      - Places by category");

    axum::serve(listener, app).await?;
    Ok(())
}
