//! Course requirement model.
//!
//! A course requirement describes the weekly teaching demand for one
//! course offering: how many contact hours, what kind of sessions,
//! how large the batch is, and what room type the sessions need.
//! Immutable input to a generation run.

use serde::{Deserialize, Serialize};

use super::RoomType;

/// Kind of teaching session a course holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Theory,
    Practical,
    Tutorial,
    Project,
}

impl SessionType {
    /// Number of consecutive base slots one session occupies.
    ///
    /// Practical sessions span two base slots; everything else fits one.
    pub fn slot_span(&self) -> u16 {
        match self {
            SessionType::Practical => 2,
            _ => 1,
        }
    }
}

/// A ranked faculty preference attached to a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyPreference {
    /// Preferred faculty identifier.
    pub faculty_id: String,
    /// Rank, 1 (strongest) to 5.
    pub priority: u8,
}

/// Weekly teaching demand for one course offering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRequirement {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Owning department identifier.
    pub department: String,
    /// Semester the course is offered in (1-8).
    pub semester: u8,
    /// Weekly contact hours to place.
    pub weekly_hours: u32,
    /// Kind of sessions this course holds.
    pub session_type: SessionType,
    /// Number of enrolled students.
    pub batch_size: u32,
    /// Whether sessions need a laboratory.
    pub requires_lab: bool,
    /// Ranked faculty preferences (strongest first by priority).
    pub faculty_preferences: Vec<FacultyPreference>,
}

impl CourseRequirement {
    /// Creates a new course requirement with teaching defaults.
    pub fn new(id: impl Into<String>, department: impl Into<String>, semester: u8) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            department: department.into(),
            semester,
            weekly_hours: 1,
            session_type: SessionType::Theory,
            batch_size: 60,
            requires_lab: false,
            faculty_preferences: Vec::new(),
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the weekly contact hours.
    pub fn with_weekly_hours(mut self, hours: u32) -> Self {
        self.weekly_hours = hours;
        self
    }

    /// Sets the session type. Practical sessions also require a lab.
    pub fn with_session_type(mut self, session_type: SessionType) -> Self {
        self.session_type = session_type;
        if session_type == SessionType::Practical {
            self.requires_lab = true;
        }
        self
    }

    /// Sets the batch size.
    pub fn with_batch_size(mut self, size: u32) -> Self {
        self.batch_size = size;
        self
    }

    /// Marks the course as needing a laboratory.
    pub fn with_lab_required(mut self, required: bool) -> Self {
        self.requires_lab = required;
        self
    }

    /// Adds a ranked faculty preference.
    pub fn with_faculty_preference(mut self, faculty_id: impl Into<String>, priority: u8) -> Self {
        self.faculty_preferences.push(FacultyPreference {
            faculty_id: faculty_id.into(),
            priority,
        });
        self
    }

    /// Room type this course's sessions need.
    pub fn required_room_type(&self) -> RoomType {
        if self.requires_lab {
            RoomType::Laboratory
        } else {
            RoomType::Classroom
        }
    }

    /// Duration of one session in minutes, given the base slot length.
    pub fn session_minutes(&self, slot_minutes: u16) -> u16 {
        slot_minutes * self.session_type.slot_span()
    }

    /// Number of sessions needed per week: `ceil(weekly_minutes / session_minutes)`.
    pub fn required_sessions(&self, slot_minutes: u16) -> u32 {
        let weekly_minutes = self.weekly_hours * 60;
        let session = u32::from(self.session_minutes(slot_minutes)).max(1);
        weekly_minutes.div_ceil(session)
    }
}
