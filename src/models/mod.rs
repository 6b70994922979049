//! Timetabling domain models.
//!
//! Core data types for describing a weekly timetabling problem and its
//! solutions: course demands, faculty and room pools, the slot calendar,
//! and the schedule candidate the optimizer evolves.

mod calendar;
mod candidate;
mod course;
mod faculty;
mod room;
mod time;

pub use calendar::Calendar;
pub use candidate::{
    Assignment, ConflictKind, ConflictRecord, DaySchedule, ScheduleCandidate,
    ScheduleConstraints, Severity,
};
pub use course::{CourseRequirement, FacultyPreference, SessionType};
pub use faculty::FacultyProfile;
pub use room::{RoomProfile, RoomType};
pub use time::{format_hm, hm, TimeRange, UnavailableSlot, Weekday};
