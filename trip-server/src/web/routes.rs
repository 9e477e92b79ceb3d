//! HTTP route handlers.

use std::collections::BTreeMap;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::catalog::CatalogError;
use crate::planner::{Scheduler, rank_destinations, recommend_places};

use super::dto::*;
use super::state::AppState;

const DEFAULT_TOP_DESTINATIONS: usize = 5;
const MAX_TOP_DESTINATIONS: usize = 50;
const DEFAULT_RECOMMENDATIONS: usize = 20;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/itineraries/plan", post(plan_itinerary))
        .route("/destinations/top", get(top_destinations))
        .route("/recommendations/categories", get(categories))
        .route("/recommendations/places", post(recommend))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::NotFound {
        message: "no such endpoint".to_string(),
    }
}

/// Plan an itinerary for a date range.
async fn plan_itinerary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanItineraryResponse>, AppError> {
    let req: PlanItineraryRequest = parse_json(&body)?;
    let request = req.into_planning_request()?;

    let catalog = state.catalog.snapshot().await?;
    let scheduler = Scheduler::new(catalog.as_ref(), state.estimator.as_ref(), &state.config);
    let visits = scheduler.plan(&request);

    Ok(Json(PlanItineraryResponse::from_visits(&visits, &catalog)))
}

/// Parse a JSON request body, logging it on failure.
///
/// Parsed by hand rather than with the `Json` extractor so that bad bodies
/// get the same JSON error response as every other failure.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "invalid request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Best-reviewed destinations.
async fn top_destinations(
    State(state): State<AppState>,
    query: Result<Query<TopDestinationsQuery>, QueryRejection>,
) -> Result<Json<Vec<DestinationRatingResult>>, AppError> {
    let Query(query) = query?;
    let limit = query
        .limit
        .unwrap_or(DEFAULT_TOP_DESTINATIONS)
        .min(MAX_TOP_DESTINATIONS);

    let catalog = state.catalog.snapshot().await?;
    let results = rank_destinations(catalog.as_ref(), limit)
        .iter()
        .filter_map(|r| DestinationRatingResult::from_rating(r, &catalog))
        .collect();

    Ok(Json(results))
}

/// Distinct place categories.
async fn categories(State(state): State<AppState>) -> Result<Json<Vec<CategoryResult>>, AppError> {
    let catalog = state.catalog.snapshot().await?;
    let results = catalog
        .categories()
        .into_iter()
        .map(|c| CategoryResult {
            category: c.to_string(),
        })
        .collect();

    Ok(Json(results))
}

/// Places in the requested categories, grouped by category.
async fn recommend(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BTreeMap<String, Vec<RecommendedPlace>>>, AppError> {
    let req: RecommendPlacesRequest = parse_json(&body)?;
    let limit = req.limit.unwrap_or(DEFAULT_RECOMMENDATIONS);

    let catalog = state.catalog.snapshot().await?;
    let grouped = recommend_places(&catalog, &req.categories, limit);

    Ok(Json(recommendations_response(grouped, &catalog)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<RequestError> for AppError {
    fn from(e: RequestError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
