//! Itinerary planning.
//!
//! This module implements the trip scheduling engine: given a date range,
//! candidate places and per-day limits, it lays out a day-by-day,
//! time-slotted schedule of visits. It also ranks destinations by review
//! quality and recommends places by category.
//!
//! Everything here is synchronous and works from a read-only catalog
//! snapshot, so independent requests can be planned concurrently.

mod config;
mod cost;
mod ordering;
mod rank;
mod recommend;
mod request;
mod schedule;
mod visit;

pub use config::PlannerConfig;
pub use cost::{
    CategoryCostEstimator, CostEstimator, CostModel, FixedCostEstimator, RandomCostEstimator,
    UnknownCostModel,
};
pub use ordering::order_candidates;
pub use rank::{DestinationRating, aggregate_ratings, rank_destinations};
pub use recommend::recommend_places;
pub use request::{DEFAULT_DAILY_START, DEFAULT_MAX_PLACES_PER_DAY, PlanningRequest};
pub use schedule::Scheduler;
pub use visit::{DaySummary, ScheduledVisit, summarize_days};
