//! Time-of-day and weekday primitives.
//!
//! All times are minutes since midnight (`u16`), which keeps slot
//! arithmetic and comparisons free of timezone and DST concerns.
//! Intervals are half-open: `[start, end)`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Converts an (hour, minute) pair to minutes since midnight.
#[inline]
pub const fn hm(hour: u16, minute: u16) -> u16 {
    hour * 60 + minute
}

/// Formats minutes since midnight as `HH:MM`.
pub fn format_hm(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// A half-open time-of-day interval `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Interval start (minutes since midnight, inclusive).
    pub start_min: u16,
    /// Interval end (minutes since midnight, exclusive).
    pub end_min: u16,
}

impl TimeRange {
    /// Creates a new time range.
    pub fn new(start_min: u16, end_min: u16) -> Self {
        Self { start_min, end_min }
    }

    /// Duration of this range in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether a time-of-day falls within this range.
    #[inline]
    pub fn contains(&self, minutes: u16) -> bool {
        minutes >= self.start_min && minutes < self.end_min
    }

    /// Whether another range lies entirely within this one.
    pub fn covers(&self, other: &Self) -> bool {
        other.start_min >= self.start_min && other.end_min <= self.end_min
    }

    /// Whether two ranges overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_hm(self.start_min), format_hm(self.end_min))
    }
}

/// A working-week day. Sunday is outside the teaching week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// The working week in calendar order.
    pub const WEEK: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Zero-based position within the working week.
    pub fn index(&self) -> usize {
        Self::WEEK.iter().position(|d| d == self).unwrap_or(0)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        };
        f.write_str(name)
    }
}

/// A recurring weekly block during which a faculty member or room
/// cannot be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailableSlot {
    /// Day of the working week.
    pub day: Weekday,
    /// Blocked time-of-day window.
    pub window: TimeRange,
}

impl UnavailableSlot {
    /// Creates a new weekly block.
    pub fn new(day: Weekday, window: TimeRange) -> Self {
        Self { day, window }
    }

    /// Whether this block collides with a proposed window on a given day.
    pub fn blocks(&self, day: Weekday, window: &TimeRange) -> bool {
        self.day == day && self.window.overlaps(window)
    }
}
