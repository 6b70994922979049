//! Input validation for timetabling problems.
//!
//! Checks structural integrity of courses, faculty, and rooms before
//! optimization starts. Detects:
//! - Empty course, faculty, or room lists
//! - Duplicate IDs
//! - Zero-hour courses and zero-capacity rooms
//! - Degenerate constraint blocks
//!
//! References to unknown faculty or rooms are deliberately not errors:
//! a course preferring a faculty that does not exist simply falls
//! through to the next selection tier at placement time.

use std::collections::HashSet;

use crate::models::{CourseRequirement, FacultyProfile, RoomProfile, ScheduleConstraints};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required input collection is empty.
    EmptyInput,
    /// Two entities share the same ID.
    DuplicateId,
    /// A course demands zero weekly hours or a faculty has a zero cap.
    InvalidHours,
    /// A room or batch has no capacity.
    InvalidCapacity,
    /// The constraints block cannot produce a usable slot grid.
    InvalidConstraints,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a timetabling problem.
///
/// Checks:
/// 1. At least one course, one faculty member, and one room
/// 2. No duplicate course, faculty, or room IDs
/// 3. Every course demands at least one weekly hour
/// 4. Positive room capacities and batch sizes
/// 5. A constraints block that yields a non-empty slot grid
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    courses: &[CourseRequirement],
    faculties: &[FacultyProfile],
    rooms: &[RoomProfile],
    constraints: &ScheduleConstraints,
) -> ValidationResult {
    let mut errors = Vec::new();

    if courses.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "no courses to schedule",
        ));
    }
    if faculties.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "no faculty available for assignment",
        ));
    }
    if rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "no rooms available for booking",
        ));
    }

    let mut course_ids = HashSet::new();
    for c in courses {
        if !course_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }
        if c.weekly_hours == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHours,
                format!("Course '{}' demands zero weekly hours", c.id),
            ));
        }
        if c.batch_size == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("Course '{}' has an empty batch", c.id),
            ));
        }
    }

    let mut faculty_ids = HashSet::new();
    for f in faculties {
        if !faculty_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty ID: {}", f.id),
            ));
        }
        if f.max_weekly_hours == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHours,
                format!("Faculty '{}' has a zero weekly-hour cap", f.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
        if r.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("Room '{}' has zero capacity", r.id),
            ));
        }
    }

    errors.extend(validate_constraints(constraints));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that a constraints block yields a usable slot grid.
fn validate_constraints(constraints: &ScheduleConstraints) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if constraints.working_hours.start_min >= constraints.working_hours.end_min {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConstraints,
            "working hours window is empty",
        ));
    }
    if constraints.slot_minutes == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConstraints,
            "slot length must be positive",
        ));
    } else if constraints.slot_minutes > constraints.working_hours.duration_min() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConstraints,
            "slot length exceeds the working hours window",
        ));
    }
    if constraints.max_sessions_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConstraints,
            "max sessions per day must be positive",
        ));
    }

    errors
}
