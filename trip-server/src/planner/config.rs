//! Scheduling configuration for the itinerary planner.

use chrono::Duration;

use crate::domain::ClockTime;

/// Fixed parameters of the day-placement heuristic.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Gap inserted between consecutive visits on the same day (minutes).
    pub travel_buffer_mins: i64,

    /// Latest time a visit may end. A day's placement stops at the first
    /// candidate that would end after this.
    pub closing_time: ClockTime,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(travel_buffer_mins: i64, closing_time: ClockTime) -> Self {
        Self {
            travel_buffer_mins,
            closing_time,
        }
    }

    /// Returns the travel buffer as a Duration.
    pub fn travel_buffer(&self) -> Duration {
        Duration::minutes(self.travel_buffer_mins)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            travel_buffer_mins: 30,
            closing_time: ClockTime::from_minutes(22 * 60), // 22:00
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.travel_buffer_mins, 30);
        assert_eq!(config.closing_time.to_string(), "22:00");
        assert_eq!(config.travel_buffer(), Duration::minutes(30));
    }

    #[test]
    fn custom_config() {
        let closing = ClockTime::parse_hhmm("18:30").unwrap();
        let config = PlannerConfig::new(15, closing);

        assert_eq!(config.travel_buffer(), Duration::minutes(15));
        assert_eq!(config.closing_time, closing);
    }
}
