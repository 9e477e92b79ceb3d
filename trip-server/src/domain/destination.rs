//! Destinations and the reviews left on their places.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{DestinationId, PlaceId, ReviewId, UserId};

/// A city or region that groups points of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Province or state the destination sits in.
    #[serde(default)]
    pub province: Option<String>,
}

impl Destination {
    pub fn new(id: DestinationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            province: None,
        }
    }
}

/// A user's rating of a single point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,

    pub place_id: PlaceId,

    #[serde(default)]
    pub user_id: Option<UserId>,

    /// Star rating, nominally 1-5.
    pub rating: i32,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub review_date: Option<NaiveDate>,
}

impl Review {
    pub fn new(id: ReviewId, place_id: PlaceId, rating: i32) -> Self {
        Self {
            id,
            place_id,
            user_id: None,
            rating,
            comment: None,
            review_date: None,
        }
    }
}

/// A review joined to the destination of the place it rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationReview {
    pub destination_id: DestinationId,
    pub review_id: ReviewId,
    pub rating: i32,
}
