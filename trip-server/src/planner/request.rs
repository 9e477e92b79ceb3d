//! Planning requests.

use chrono::NaiveDate;

use crate::domain::{ClockTime, DestinationId, PlaceId, UserId};

/// Default time each day's first visit starts.
pub const DEFAULT_DAILY_START: ClockTime = ClockTime::from_minutes(9 * 60);

/// Default cap on visits per day.
pub const DEFAULT_MAX_PLACES_PER_DAY: usize = 3;

/// Parameters for one planning run.
///
/// The caller must ensure `end_date >= start_date`. An inverted range is
/// not rejected; it simply spans zero days.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningRequest {
    /// Who the plan is for.
    pub user_id: UserId,

    /// Destinations whose places are candidates.
    pub destination_ids: Vec<DestinationId>,

    /// First day of the trip.
    pub start_date: NaiveDate,

    /// Last day of the trip (inclusive).
    pub end_date: NaiveDate,

    /// Restrict candidates to these places. Order is irrelevant.
    pub place_ids: Option<Vec<PlaceId>>,

    /// When each day's first visit starts.
    pub daily_start_time: ClockTime,

    /// Maximum estimated spend per day. `None` is unbounded.
    pub daily_budget: Option<f64>,

    /// Maximum number of visits per day.
    pub max_places_per_day: usize,
}

impl PlanningRequest {
    /// Create a request with default start time, no budget and the default
    /// per-day cap.
    pub fn new(
        user_id: UserId,
        destination_ids: Vec<DestinationId>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            user_id,
            destination_ids,
            start_date,
            end_date,
            place_ids: None,
            daily_start_time: DEFAULT_DAILY_START,
            daily_budget: None,
            max_places_per_day: DEFAULT_MAX_PLACES_PER_DAY,
        }
    }

    /// Only consider the given places.
    pub fn with_place_ids(mut self, place_ids: Vec<PlaceId>) -> Self {
        self.place_ids = Some(place_ids);
        self
    }

    pub fn with_daily_start_time(mut self, start: ClockTime) -> Self {
        self.daily_start_time = start;
        self
    }

    pub fn with_daily_budget(mut self, budget: f64) -> Self {
        self.daily_budget = Some(budget);
        self
    }

    pub fn with_max_places_per_day(mut self, max: usize) -> Self {
        self.max_places_per_day = max;
        self
    }

    /// Number of days in the trip, counting both ends.
    ///
    /// Zero when the end date precedes the start date.
    pub fn total_days(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn request(start: u32, end: u32) -> PlanningRequest {
        PlanningRequest::new(UserId(1), vec![DestinationId(1)], date(start), date(end))
    }

    #[test]
    fn defaults() {
        let req = request(1, 3);
        assert_eq!(req.daily_start_time.to_string(), "09:00");
        assert_eq!(req.daily_budget, None);
        assert_eq!(req.max_places_per_day, 3);
        assert_eq!(req.place_ids, None);
    }

    #[test]
    fn builders() {
        let req = request(1, 3)
            .with_place_ids(vec![PlaceId(4)])
            .with_daily_start_time(ClockTime::parse_hhmm("10:30").unwrap())
            .with_daily_budget(2500.0)
            .with_max_places_per_day(5);

        assert_eq!(req.place_ids, Some(vec![PlaceId(4)]));
        assert_eq!(req.daily_start_time.to_string(), "10:30");
        assert_eq!(req.daily_budget, Some(2500.0));
        assert_eq!(req.max_places_per_day, 5);
    }

    #[test]
    fn total_days_is_inclusive() {
        assert_eq!(request(1, 1).total_days(), 1);
        assert_eq!(request(1, 3).total_days(), 3);
        assert_eq!(request(10, 30).total_days(), 21);
    }

    #[test]
    fn inverted_range_has_no_days() {
        assert_eq!(request(5, 4).total_days(), 0);
        assert_eq!(request(5, 1).total_days(), 0);
    }
}
