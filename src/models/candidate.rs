//! Schedule candidate (chromosome) model.
//!
//! A candidate is one complete proposed weekly timetable: an ordered
//! day → session mapping plus the constraints it was built under, a
//! fitness score, and the conflicts found at the last evaluation.
//! Candidates own their assignments outright; cloning a candidate
//! yields a fully independent copy.

use serde::{Deserialize, Serialize};

use super::{hm, TimeRange, Weekday};

/// Hard structural constraints a timetable is built under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConstraints {
    /// Maximum sessions placed on any single day.
    pub max_sessions_per_day: usize,
    /// Minimum clearance between sessions on the same day (minutes).
    pub min_gap_minutes: u16,
    /// Daily teaching window.
    pub working_hours: TimeRange,
    /// Lunch window; no session may intersect it.
    pub lunch_break: TimeRange,
    /// Base slot length in minutes.
    pub slot_minutes: u16,
}

impl Default for ScheduleConstraints {
    fn default() -> Self {
        Self {
            max_sessions_per_day: 6,
            min_gap_minutes: 0,
            working_hours: TimeRange::new(hm(8, 0), hm(17, 0)),
            lunch_break: TimeRange::new(hm(12, 0), hm(13, 0)),
            slot_minutes: 60,
        }
    }
}

/// One placed session: a course meeting a faculty in a room at a time.
///
/// Faculty and room are `None` when no eligible one existed at placement
/// time; the conflict detector reports such gaps on every evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Session start (minutes since midnight).
    pub start_min: u16,
    /// Session end (minutes since midnight, exclusive).
    pub end_min: u16,
    /// Course this session belongs to.
    pub course_id: String,
    /// Assigned faculty, if any was eligible.
    pub faculty_id: Option<String>,
    /// Assigned room, if any was eligible.
    pub room_id: Option<String>,
    /// Batch label ("A", or "Multiple" for oversize batches).
    pub batch: String,
    /// Whether this is a laboratory session.
    pub is_lab: bool,
}

impl Assignment {
    /// The session's time window.
    #[inline]
    pub fn window(&self) -> TimeRange {
        TimeRange::new(self.start_min, self.end_min)
    }

    /// Session length in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min.saturating_sub(self.start_min)
    }
}

/// All sessions placed on one day, in placement order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Day of the working week.
    pub day: Weekday,
    /// Sessions placed on this day.
    pub sessions: Vec<Assignment>,
}

impl DaySchedule {
    /// Time windows currently booked on this day.
    pub fn booked_windows(&self) -> Vec<TimeRange> {
        self.sessions.iter().map(|s| s.window()).collect()
    }
}

/// Classification of a detected conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// A faculty member is booked twice at the same day and time.
    #[serde(rename = "faculty-conflict")]
    Faculty,
    /// A room is booked twice at the same day and time.
    #[serde(rename = "room-conflict")]
    Room,
    /// A required session could not be placed.
    #[serde(rename = "time-conflict")]
    Time,
    /// A student batch is expected in two places at once.
    #[serde(rename = "student-conflict")]
    Student,
}

/// Conflict severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A detected scheduling conflict.
///
/// Conflict lists are derived state: the evaluator recomputes them from
/// the candidate's assignments on every fitness evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRecord {
    /// Conflict classification.
    pub kind: ConflictKind,
    /// Human-readable description.
    pub description: String,
    /// Impact severity.
    pub severity: Severity,
}

impl ConflictRecord {
    /// A faculty member double-booked at the same day and time.
    pub fn faculty_double_booked(description: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::Faculty,
            description: description.into(),
            severity: Severity::High,
        }
    }

    /// A room double-booked at the same day and time.
    pub fn room_double_booked(description: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::Room,
            description: description.into(),
            severity: Severity::High,
        }
    }

    /// A course session that could not be placed at all.
    pub fn unresolved_session(description: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::Time,
            description: description.into(),
            severity: Severity::High,
        }
    }

    /// A session placed without an eligible faculty.
    pub fn missing_faculty(description: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::Faculty,
            description: description.into(),
            severity: Severity::Medium,
        }
    }

    /// A session placed without an eligible room.
    pub fn missing_room(description: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::Room,
            description: description.into(),
            severity: Severity::Medium,
        }
    }

    /// A student batch expected in two sessions at once.
    pub fn batch_double_booked(description: impl Into<String>) -> Self {
        Self {
            kind: ConflictKind::Student,
            description: description.into(),
            severity: Severity::Medium,
        }
    }
}

/// One complete proposed weekly timetable (the GA chromosome).
///
/// `score` and `conflicts` are only meaningful after the most recent
/// evaluation; the engine re-evaluates every candidate that crossover
/// or mutation has touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleCandidate {
    /// Per-day session lists, Monday through Saturday.
    pub days: Vec<DaySchedule>,
    /// Constraints this candidate was built under.
    pub constraints: ScheduleConstraints,
    /// Fitness score in [0, 100]; `i32::MIN` until first evaluated.
    pub score: i32,
    /// Conflicts found at the last evaluation.
    pub conflicts: Vec<ConflictRecord>,
}

impl ScheduleCandidate {
    /// Creates an empty candidate covering the full working week.
    pub fn new(constraints: ScheduleConstraints) -> Self {
        Self {
            days: Weekday::WEEK
                .iter()
                .map(|&day| DaySchedule {
                    day,
                    sessions: Vec::new(),
                })
                .collect(),
            constraints,
            score: i32::MIN,
            conflicts: Vec::new(),
        }
    }

    /// The day schedule for a given weekday.
    pub fn day(&self, day: Weekday) -> &DaySchedule {
        &self.days[day.index()]
    }

    /// Mutable day schedule for a given weekday.
    pub fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        &mut self.days[day.index()]
    }

    /// Number of sessions placed for a given course across the week.
    pub fn sessions_for_course(&self, course_id: &str) -> usize {
        self.days
            .iter()
            .flat_map(|d| d.sessions.iter())
            .filter(|s| s.course_id == course_id)
            .count()
    }

    /// Total sessions placed across the week.
    pub fn total_sessions(&self) -> usize {
        self.days.iter().map(|d| d.sessions.len()).sum()
    }

    /// Marks derived state stale after a structural change.
    pub fn invalidate(&mut self) {
        self.score = i32::MIN;
        self.conflicts.clear();
    }

    /// Whether the last evaluation found no conflicts.
    pub fn is_conflict_free(&self) -> bool {
        self.score != i32::MIN && self.conflicts.is_empty()
    }
}
