//! Scheduled visits, the planner's output.

use std::collections::BTreeMap;

use chrono::Duration;
use serde::Serialize;

use crate::domain::{ClockTime, PlaceId};

/// One time-slotted visit in a planned trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledVisit {
    /// Day of the trip, starting at 1.
    pub day_no: u32,

    pub place_id: PlaceId,

    pub start_time: ClockTime,

    pub end_time: ClockTime,

    pub notes: String,

    pub estimated_cost: f64,
}

impl ScheduledVisit {
    /// Time spent at the place.
    pub fn duration(&self) -> Duration {
        self.end_time.signed_duration_since(self.start_time)
    }
}

/// Per-day totals of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DaySummary {
    pub visits: usize,
    pub total_cost: f64,
}

/// Summarise visits by day number.
///
/// Days with no visits are absent.
pub fn summarize_days(visits: &[ScheduledVisit]) -> BTreeMap<u32, DaySummary> {
    let mut days: BTreeMap<u32, DaySummary> = BTreeMap::new();
    for visit in visits {
        let day = days.entry(visit.day_no).or_default();
        day.visits += 1;
        day.total_cost += visit.estimated_cost;
    }
    days
}
