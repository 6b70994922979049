//! Room profile model.
//!
//! A teaching room with a capacity, a type, the set of departments it
//! serves, and recurring unavailable windows. Immutable input to a
//! generation run.

use serde::{Deserialize, Serialize};

use super::{CourseRequirement, TimeRange, UnavailableSlot, Weekday};

/// Room type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    Classroom,
    Laboratory,
    SeminarHall,
    Auditorium,
}

/// A teaching room available for session placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomProfile {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Room type.
    pub room_type: RoomType,
    /// Departments allowed to book this room. Empty = any department.
    pub available_for: Vec<String>,
    /// Recurring weekly windows this room cannot be booked in.
    pub unavailable: Vec<UnavailableSlot>,
}

impl RoomProfile {
    /// Creates a new room profile.
    pub fn new(id: impl Into<String>, capacity: u32, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity,
            room_type,
            available_for: Vec::new(),
            unavailable: Vec::new(),
        }
    }

    /// Creates a classroom.
    pub fn classroom(id: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, capacity, RoomType::Classroom)
    }

    /// Creates a laboratory.
    pub fn laboratory(id: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, capacity, RoomType::Laboratory)
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Restricts the room to a department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.available_for.push(department.into());
        self
    }

    /// Adds a recurring unavailable window.
    pub fn with_unavailable(mut self, day: Weekday, window: TimeRange) -> Self {
        self.unavailable.push(UnavailableSlot::new(day, window));
        self
    }

    /// Whether this room satisfies a course's capacity, type, and
    /// department requirements.
    pub fn suits(&self, course: &CourseRequirement) -> bool {
        self.capacity >= course.batch_size
            && self.room_type == course.required_room_type()
            && (self.available_for.is_empty()
                || self.available_for.iter().any(|d| d == &course.department))
    }

    /// Whether this room can be booked in the given window on the given day.
    pub fn is_available(&self, day: Weekday, window: &TimeRange) -> bool {
        !self.unavailable.iter().any(|b| b.blocks(day, window))
    }
}
