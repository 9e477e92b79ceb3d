//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogSnapshot;
use crate::domain::{ClockTime, DestinationId, PlaceId, PointOfInterest, TimeError, UserId};
use crate::planner::{
    DEFAULT_MAX_PLACES_PER_DAY, DestinationRating, PlanningRequest, ScheduledVisit, summarize_days,
};

/// Longest trip, in days, accepted over HTTP.
pub const MAX_TRIP_DAYS: i64 = 366;

/// Request to plan an itinerary.
#[derive(Debug, Deserialize)]
pub struct PlanItineraryRequest {
    /// Who the plan is for
    pub user_id: i64,

    /// Destinations to draw places from
    pub destination_ids: Vec<i64>,

    /// First day, YYYY-MM-DD
    pub start_date: String,

    /// Last day (inclusive), YYYY-MM-DD
    pub end_date: String,

    /// Optional explicit selection of places
    #[serde(default)]
    pub place_ids: Option<Vec<i64>>,

    /// Start of each day in HH:MM format (defaults to 09:00)
    #[serde(default)]
    pub daily_start_time: Option<String>,

    /// Maximum estimated spend per day
    #[serde(default)]
    pub daily_budget: Option<f64>,

    /// Maximum visits per day (defaults to 3)
    #[serde(default)]
    pub max_places_per_day: Option<usize>,
}

/// Reasons a plan request cannot be turned into a [`PlanningRequest`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("add at least one destination first")]
    NoDestinations,

    #[error("invalid {field}: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("end_date must not be before start_date")]
    InvertedDates,

    #[error("trip of {days} days is longer than the {max} day limit")]
    TripTooLong { days: i64, max: i64 },

    #[error("invalid daily_start_time: {0}")]
    InvalidStartTime(#[from] TimeError),

    #[error("daily_budget must not be negative")]
    NegativeBudget,
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, RequestError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| RequestError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

impl PlanItineraryRequest {
    /// Validate and convert to the planner's request type.
    pub fn into_planning_request(self) -> Result<PlanningRequest, RequestError> {
        if self.destination_ids.is_empty() {
            return Err(RequestError::NoDestinations);
        }

        let start_date = parse_date("start_date", &self.start_date)?;
        let end_date = parse_date("end_date", &self.end_date)?;
        if end_date < start_date {
            return Err(RequestError::InvertedDates);
        }
        let days = (end_date - start_date).num_days() + 1;
        if days > MAX_TRIP_DAYS {
            return Err(RequestError::TripTooLong {
                days,
                max: MAX_TRIP_DAYS,
            });
        }

        let mut request = PlanningRequest::new(
            UserId(self.user_id),
            self.destination_ids.into_iter().map(DestinationId).collect(),
            start_date,
            end_date,
        )
        .with_max_places_per_day(
            self.max_places_per_day
                .unwrap_or(DEFAULT_MAX_PLACES_PER_DAY),
        );

        if let Some(start) = &self.daily_start_time {
            request = request.with_daily_start_time(ClockTime::parse_hhmm(start)?);
        }

        if let Some(budget) = self.daily_budget {
            if budget < 0.0 {
                return Err(RequestError::NegativeBudget);
            }
            request = request.with_daily_budget(budget);
        }

        if let Some(ids) = self.place_ids {
            request = request.with_place_ids(ids.into_iter().map(PlaceId).collect());
        }

        Ok(request)
    }
}

/// A scheduled visit.
#[derive(Debug, Serialize)]
pub struct VisitResult {
    /// Day of the trip, from 1
    pub day_no: u32,

    pub place_id: i64,

    /// Place name, if the place is still in the catalog
    pub place_name: Option<String>,

    /// Start time, HH:MM
    pub start_time: String,

    /// End time, HH:MM
    pub end_time: String,

    pub notes: String,

    pub estimated_cost: f64,
}

/// Response for itinerary planning.
#[derive(Debug, Serialize)]
pub struct PlanItineraryResponse {
    /// Human-readable summary
    pub detail: String,

    /// Number of planned visits
    pub count: usize,

    /// Visits by day, then start time
    pub visits: Vec<VisitResult>,

    /// Per-day totals, for days with at least one visit
    pub days: Vec<DayResult>,
}

/// Totals for one day of a plan.
#[derive(Debug, Serialize)]
pub struct DayResult {
    pub day_no: u32,

    pub visits: usize,

    pub total_cost: f64,
}

/// Query for top destinations.
#[derive(Debug, Deserialize)]
pub struct TopDestinationsQuery {
    /// Maximum results (default 5)
    pub limit: Option<usize>,
}

/// A ranked destination.
#[derive(Debug, Serialize)]
pub struct DestinationRatingResult {
    pub destination_id: i64,

    pub name: String,

    pub province: Option<String>,

    /// Mean rating rounded to one decimal place
    pub avg_rating: f64,

    pub review_count: usize,
}

/// A place category.
#[derive(Debug, Serialize)]
pub struct CategoryResult {
    pub category: String,
}

/// Request for category-based place recommendations.
#[derive(Debug, Deserialize)]
pub struct RecommendPlacesRequest {
    /// Categories of interest
    pub categories: Vec<String>,

    /// Maximum results (default 20)
    pub limit: Option<usize>,
}

/// A recommended place.
#[derive(Debug, Serialize)]
pub struct RecommendedPlace {
    pub place_id: i64,

    pub place_name: String,

    pub category: Option<String>,

    pub destination_name: Option<String>,

    pub description: Option<String>,

    /// Visit length in hours
    pub duration: f64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl VisitResult {
    /// Create from a scheduled visit, looking up the place name.
    pub fn from_visit(visit: &ScheduledVisit, catalog: &CatalogSnapshot) -> Self {
        Self {
            day_no: visit.day_no,
            place_id: visit.place_id.get(),
            place_name: catalog.place(visit.place_id).map(|p| p.name.clone()),
            start_time: visit.start_time.to_string(),
            end_time: visit.end_time.to_string(),
            notes: visit.notes.clone(),
            estimated_cost: visit.estimated_cost,
        }
    }
}

impl PlanItineraryResponse {
    /// Create from the planner's output.
    pub fn from_visits(visits: &[ScheduledVisit], catalog: &CatalogSnapshot) -> Self {
        Self {
            detail: format!("Planned {} activities", visits.len()),
            count: visits.len(),
            visits: visits
                .iter()
                .map(|v| VisitResult::from_visit(v, catalog))
                .collect(),
            days: summarize_days(visits)
                .into_iter()
                .map(|(day_no, summary)| DayResult {
                    day_no,
                    visits: summary.visits,
                    total_cost: summary.total_cost,
                })
                .collect(),
        }
    }
}

impl DestinationRatingResult {
    /// Create from a rating, if the destination is in the catalog.
    pub fn from_rating(rating: &DestinationRating, catalog: &CatalogSnapshot) -> Option<Self> {
        let destination = catalog.destination(rating.destination_id)?;
        Some(Self {
            destination_id: rating.destination_id.get(),
            name: destination.name.clone(),
            province: destination.province.clone(),
            avg_rating: round_one_decimal(rating.mean_rating),
            review_count: rating.review_count,
        })
    }
}

impl RecommendedPlace {
    /// Create from a catalog place.
    pub fn from_place(place: &PointOfInterest, catalog: &CatalogSnapshot) -> Self {
        Self {
            place_id: place.id.get(),
            place_name: place.name.clone(),
            category: place.category.clone(),
            destination_name: catalog
                .destination(place.destination_id)
                .map(|d| d.name.clone()),
            description: place.description.clone(),
            duration: place.visit_hours(),
        }
    }
}

/// Group recommended places for the response body.
pub fn recommendations_response(
    grouped: BTreeMap<&str, Vec<&PointOfInterest>>,
    catalog: &CatalogSnapshot,
) -> BTreeMap<String, Vec<RecommendedPlace>> {
    grouped
        .into_iter()
        .map(|(category, places)| {
            let places = places
                .into_iter()
                .map(|p| RecommendedPlace::from_place(p, catalog))
                .collect();
            (category.to_string(), places)
        })
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
