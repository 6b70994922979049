//! Faculty profile model.
//!
//! A faculty member with a weekly teaching-hour cap, a preferred course
//! set, and recurring blackout windows. Immutable input to a generation
//! run; the optimizer never mutates profiles.

use serde::{Deserialize, Serialize};

use super::{TimeRange, UnavailableSlot, Weekday};

/// A faculty member available for teaching assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyProfile {
    /// Unique faculty identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Department identifier.
    pub department: String,
    /// Maximum weekly teaching hours.
    pub max_weekly_hours: u32,
    /// Course IDs this faculty prefers to teach.
    pub preferred_courses: Vec<String>,
    /// Recurring weekly windows this faculty cannot teach in.
    pub unavailable: Vec<UnavailableSlot>,
}

impl FacultyProfile {
    /// Creates a new faculty profile with the default 40-hour weekly cap.
    pub fn new(id: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            department: department.into(),
            max_weekly_hours: 40,
            preferred_courses: Vec::new(),
            unavailable: Vec::new(),
        }
    }

    /// Sets the faculty name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the maximum weekly teaching hours.
    pub fn with_max_weekly_hours(mut self, hours: u32) -> Self {
        self.max_weekly_hours = hours;
        self
    }

    /// Adds a preferred course.
    pub fn with_preferred_course(mut self, course_id: impl Into<String>) -> Self {
        self.preferred_courses.push(course_id.into());
        self
    }

    /// Adds a recurring blackout window.
    pub fn with_unavailable(mut self, day: Weekday, window: TimeRange) -> Self {
        self.unavailable.push(UnavailableSlot::new(day, window));
        self
    }

    /// Whether this faculty prefers to teach the given course.
    pub fn prefers(&self, course_id: &str) -> bool {
        self.preferred_courses.iter().any(|c| c == course_id)
    }

    /// Whether this faculty can teach in the given window on the given day.
    pub fn is_available(&self, day: Weekday, window: &TimeRange) -> bool {
        !self.unavailable.iter().any(|b| b.blocks(day, window))
    }

    /// Weekly teaching capacity in minutes.
    pub fn weekly_capacity_min(&self) -> u32 {
        self.max_weekly_hours * 60
    }
}
