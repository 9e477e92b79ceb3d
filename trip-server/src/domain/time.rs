//! Time-of-day handling for scheduled visits.
//!
//! Visit slots are exchanged as "HH:MM" strings. Internally a time of day is
//! a count of minutes since midnight, so cutoff checks are numeric rather
//! than string comparisons. There is no date component: a day's schedule
//! always ends at the closing cutoff before midnight is reached.

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time of day, stored as minutes since midnight.
///
/// Values produced by parsing are always within a single day. Arithmetic
/// may carry a value past midnight (for example 18:00 plus six hours is
/// 24:00); such values compare greater than every in-day time, which is
/// what the closing cutoff check relies on.
///
/// # Examples
///
/// ```
/// use trip_server::domain::ClockTime;
/// use chrono::Duration;
///
/// let start = ClockTime::parse_hhmm("09:00").unwrap();
/// let end = start + Duration::minutes(90);
/// assert_eq!(end.to_string(), "10:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    /// Midnight at the start of the day.
    pub const MIDNIGHT: ClockTime = ClockTime { minutes: 0 };

    /// Create a time from a raw minute count since midnight.
    ///
    /// The count is not limited to a single day.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Create a time from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_server::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("0900").is_err());
    /// assert!(ClockTime::parse_hhmm("9:00").is_err());
    /// assert!(ClockTime::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::from_hm(hour, minute)
    }

    /// Returns the number of minutes since midnight.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Returns the hour component.
    ///
    /// This is 24 or more for times carried past midnight.
    pub fn hour(&self) -> u32 {
        self.minutes / 60
    }

    /// Returns the minute component (0-59).
    pub fn minute(&self) -> u32 {
        self.minutes % 60
    }

    /// Whether this time still falls within the day it started on.
    pub fn is_within_day(&self) -> bool {
        self.minutes < MINUTES_PER_DAY
    }

    /// Add a duration, returning `None` if the result would be negative or
    /// overflow.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        let total = i64::from(self.minutes).checked_add(duration.num_minutes())?;
        u32::try_from(total).ok().map(Self::from_minutes)
    }

    /// Returns the duration between two times.
    ///
    /// Negative if `earlier` is actually after `self`.
    pub fn signed_duration_since(&self, earlier: Self) -> Duration {
        Duration::minutes(i64::from(self.minutes) - i64::from(earlier.minutes))
    }
}

impl Add<Duration> for ClockTime {
    type Output = Self;

    /// Saturating addition: clamps at midnight for negative durations and at
    /// the largest representable time on overflow.
    fn add(self, rhs: Duration) -> Self::Output {
        self.checked_add(rhs).unwrap_or(if rhs < Duration::zero() {
            Self::MIDNIGHT
        } else {
            Self::from_minutes(u32::MAX)
        })
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hhmm(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_hhmm(&s).map_err(serde::de::Error::custom)
    }
}

/// Convert a visit length in fractional hours to a whole-minute duration.
///
/// Rounds to the nearest minute. Negative or non-finite inputs give a zero
/// duration. Very long visits are capped at `u32::MAX` minutes, which is
/// already past the end of any day.
///
/// # Examples
///
/// ```
/// use trip_server::domain::hours_to_duration;
/// use chrono::Duration;
///
/// assert_eq!(hours_to_duration(1.5), Duration::minutes(90));
/// assert_eq!(hours_to_duration(0.33), Duration::minutes(20));
/// ```
pub fn hours_to_duration(hours: f64) -> Duration {
    if !hours.is_finite() || hours <= 0.0 {
        return Duration::zero();
    }
    let minutes = (hours * 60.0).round().min(f64::from(u32::MAX));
    Duration::minutes(minutes as i64)
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
