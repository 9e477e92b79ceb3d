//! Points of interest.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::ids::{DestinationId, PlaceId};
use super::time::hours_to_duration;

/// Visit length used when neither the place nor its category says otherwise.
pub const DEFAULT_VISIT_HOURS: f64 = 2.0;

/// A visitable place belonging to a destination.
///
/// The category is a free-text label ("History", "Food & Drink", ...). It is
/// only interpreted heuristically, by case-insensitive keyword matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: PlaceId,

    pub destination_id: DestinationId,

    /// Display name.
    pub name: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Fixed visit length in hours. When absent the category decides.
    #[serde(default, alias = "duration")]
    pub duration_hours: Option<f64>,
}

impl PointOfInterest {
    /// Create a place with no category, description or fixed duration.
    pub fn new(id: PlaceId, destination_id: DestinationId, name: impl Into<String>) -> Self {
        Self {
            id,
            destination_id,
            name: name.into(),
            category: None,
            description: None,
            duration_hours: None,
        }
    }

    /// Set the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set a fixed visit length in hours.
    pub fn with_duration_hours(mut self, hours: f64) -> Self {
        self.duration_hours = Some(hours);
        self
    }

    /// Visit length in hours: the fixed value if set, otherwise derived from
    /// the category.
    pub fn visit_hours(&self) -> f64 {
        self.duration_hours
            .unwrap_or_else(|| category_visit_hours(self.category.as_deref()))
    }

    /// Visit length rounded to the minute.
    pub fn visit_duration(&self) -> Duration {
        hours_to_duration(self.visit_hours())
    }
}

/// Typical visit length for a category label.
///
/// Keywords are checked in order, so "Museum Cafe" counts as a museum.
///
/// # Examples
///
/// ```
/// use trip_server::domain::category_visit_hours;
///
/// assert_eq!(category_visit_hours(Some("Street Food")), 1.5);
/// assert_eq!(category_visit_hours(Some("Trekking")), 3.0);
/// assert_eq!(category_visit_hours(None), 2.0);
/// ```
pub fn category_visit_hours(category: Option<&str>) -> f64 {
    let Some(category) = category else {
        return DEFAULT_VISIT_HOURS;
    };
    let cat = category.to_lowercase();

    if cat.contains("history") || cat.contains("museum") {
        2.0
    } else if cat.contains("food") || cat.contains("restaurant") {
        1.5
    } else if cat.contains("adventure") || cat.contains("trek") {
        3.0
    } else if cat.contains("shopping") || cat.contains("market") {
        2.0
    } else {
        DEFAULT_VISIT_HOURS
    }
}
