//! High-level timetable generation entry point.
//!
//! Validates the inputs, assembles the problem, runs the evolution
//! engine, and returns the best timetable found together with run
//! statistics.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::info;

use crate::engine::{EngineConfig, Evolution};
use crate::ga::{TimetableProblem, MAX_SCORE};
use crate::models::{CourseRequirement, FacultyProfile, RoomProfile, ScheduleCandidate, ScheduleConstraints};
use crate::validation::{validate_input, ValidationError};

/// Input container for timetable generation.
#[derive(Debug, Clone)]
pub struct TimetableRequest {
    /// Courses to place.
    pub courses: Vec<CourseRequirement>,
    /// Faculty available for assignment.
    pub faculties: Vec<FacultyProfile>,
    /// Rooms available for booking.
    pub rooms: Vec<RoomProfile>,
    /// Structural constraints; defaults apply when unset.
    pub constraints: Option<ScheduleConstraints>,
    /// Restrict generation to one semester's courses.
    pub semester: Option<u8>,
}

impl TimetableRequest {
    /// Creates a new request with default constraints and no filter.
    pub fn new(
        courses: Vec<CourseRequirement>,
        faculties: Vec<FacultyProfile>,
        rooms: Vec<RoomProfile>,
    ) -> Self {
        Self {
            courses,
            faculties,
            rooms,
            constraints: None,
            semester: None,
        }
    }

    /// Overrides the structural constraints.
    pub fn with_constraints(mut self, constraints: ScheduleConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Restricts generation to one semester.
    pub fn with_semester(mut self, semester: u8) -> Self {
        self.semester = Some(semester);
        self
    }

    /// The courses in scope after the semester filter.
    fn courses_in_scope(&self) -> Vec<CourseRequirement> {
        match self.semester {
            Some(sem) => self
                .courses
                .iter()
                .filter(|c| c.semester == sem)
                .cloned()
                .collect(),
            None => self.courses.clone(),
        }
    }
}

/// Result of a timetable generation run.
#[derive(Debug, Clone)]
pub struct TimetableOutcome {
    /// Best timetable found across all generations.
    pub best: ScheduleCandidate,
    /// Generations completed.
    pub generations: usize,
    /// Whether a conflict-free timetable was found.
    pub reached_target: bool,
    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Generates a timetable for the given request.
///
/// Runs until a conflict-free timetable appears or the configured
/// generation budget is spent, and returns the best candidate seen at
/// any point in the run.
///
/// # Errors
/// Returns the structural issues found in the input if validation
/// fails; the optimizer never runs on invalid input.
///
/// # Example
///
/// ```
/// use timetabler::models::{CourseRequirement, FacultyProfile, RoomProfile};
/// use timetabler::scheduler::{generate_timetable, TimetableRequest};
/// use timetabler::engine::EngineConfig;
///
/// let courses = vec![
///     CourseRequirement::new("CS201", "CSE", 3)
///         .with_name("Data Structures")
///         .with_weekly_hours(3),
/// ];
/// let faculties = vec![FacultyProfile::new("F1", "CSE")];
/// let rooms = vec![RoomProfile::classroom("R101", 70)];
///
/// let request = TimetableRequest::new(courses, faculties, rooms);
/// let config = EngineConfig::default().with_seed(42);
/// let outcome = generate_timetable(&request, &config).unwrap();
/// assert_eq!(outcome.best.sessions_for_course("CS201"), 3);
/// ```
pub fn generate_timetable(
    request: &TimetableRequest,
    config: &EngineConfig,
) -> Result<TimetableOutcome, Vec<ValidationError>> {
    generate_timetable_with_cancel(request, config, None)
}

/// Generates a timetable with an optional cancellation token.
///
/// Setting the token to `true` mid-run stops the engine at the end of
/// the current generation; the outcome still carries the best
/// candidate found up to that point.
pub fn generate_timetable_with_cancel(
    request: &TimetableRequest,
    config: &EngineConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<TimetableOutcome, Vec<ValidationError>> {
    let constraints = request.constraints.clone().unwrap_or_default();
    let courses = request.courses_in_scope();
    validate_input(&courses, &request.faculties, &request.rooms, &constraints)?;

    info!(
        "generating timetable: {} courses, {} faculty, {} rooms",
        courses.len(),
        request.faculties.len(),
        request.rooms.len()
    );

    let problem = TimetableProblem::new(
        courses,
        request.faculties.clone(),
        request.rooms.clone(),
        constraints,
    );
    // A conflict-free timetable scores 100; stop as soon as one appears
    let config = config.clone().with_target_fitness(f64::from(MAX_SCORE));
    let result = Evolution::run_with_cancel(&problem, &config, cancel);

    Ok(TimetableOutcome {
        best: result.best,
        generations: result.generations,
        reached_target: result.reached_target,
        cancelled: result.cancelled,
    })
}
