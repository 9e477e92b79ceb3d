//! Domain types for the trip planner.
//!
//! These are the read-only catalog records the planner works from, plus the
//! time-of-day type used for visit slots.

mod destination;
mod ids;
mod place;
mod time;

pub use destination::{Destination, DestinationReview, Review};
pub use ids::{DestinationId, PlaceId, ReviewId, UserId};
pub use place::{DEFAULT_VISIT_HOURS, PointOfInterest, category_visit_hours};
pub use time::{ClockTime, MINUTES_PER_DAY, TimeError, hours_to_duration};
