//! Web layer for the trip planner.
//!
//! Provides HTTP endpoints for planning itineraries, ranking destinations
//! and recommending places.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
