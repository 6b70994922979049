//! Random candidate construction.
//!
//! Builds initial timetable candidates by placing every required
//! session of every course at a random free grid window, picking a
//! faculty by preference tier and a room by tightest fit. Placement is
//! bounded: a session that cannot be placed within the attempt budget
//! is recorded as an unresolved-session conflict instead of looping
//! forever, and the candidate is returned regardless.

use std::collections::HashMap;

use rand::Rng;

use crate::models::{
    Assignment, Calendar, CourseRequirement, FacultyProfile, RoomProfile, ScheduleCandidate,
    ScheduleConstraints, TimeRange, Weekday,
};

use super::conflicts::{missing_faculty_record, missing_room_record};

/// Random placement attempts allowed per required session.
const ATTEMPTS_PER_SESSION: u32 = 24;

/// Batch sizes above this split into multiple student groups.
const SPLIT_THRESHOLD: u32 = 60;

/// Outcome of one bounded placement attempt loop.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PlacementOutcome {
    /// The session was placed on the given day.
    Placed,
    /// No placement found within this attempt; carries the reason.
    Unresolved(PlacementFailure),
}

/// Why a single placement attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlacementFailure {
    /// The chosen day already holds the per-day session maximum.
    DayFull,
    /// No free grid window of the session's duration on the chosen day.
    NoFreeWindow,
}

/// Builds random schedule candidates from a fixed problem instance.
///
/// Borrows the problem inputs; one builder serves the whole run.
#[derive(Debug, Clone)]
pub struct CandidateBuilder<'a> {
    courses: &'a [CourseRequirement],
    faculties: &'a [FacultyProfile],
    rooms: &'a [RoomProfile],
    calendar: &'a Calendar,
    constraints: &'a ScheduleConstraints,
}

impl<'a> CandidateBuilder<'a> {
    pub fn new(
        courses: &'a [CourseRequirement],
        faculties: &'a [FacultyProfile],
        rooms: &'a [RoomProfile],
        calendar: &'a Calendar,
        constraints: &'a ScheduleConstraints,
    ) -> Self {
        Self {
            courses,
            faculties,
            rooms,
            calendar,
            constraints,
        }
    }

    /// Builds one complete candidate.
    ///
    /// Every course gets its required sessions placed, or an
    /// unresolved-session conflict recorded for the shortfall. Always
    /// returns a structurally valid candidate.
    pub fn build<R: Rng>(&self, rng: &mut R) -> ScheduleCandidate {
        let mut candidate = ScheduleCandidate::new(self.constraints.clone());
        let mut workload: HashMap<String, u32> = HashMap::new();

        for course in self.courses {
            self.place_course(course, &mut candidate, &mut workload, rng);
        }
        candidate
    }

    /// Places all required sessions of one course, within the attempt
    /// budget. Shortfalls become unresolved-session conflicts.
    fn place_course<R: Rng>(
        &self,
        course: &CourseRequirement,
        candidate: &mut ScheduleCandidate,
        workload: &mut HashMap<String, u32>,
        rng: &mut R,
    ) {
        let required = course.required_sessions(self.constraints.slot_minutes);
        let budget = required * ATTEMPTS_PER_SESSION;

        let mut placed = 0u32;
        let mut attempts = 0u32;
        while placed < required && attempts < budget {
            attempts += 1;
            if self.try_place_session(course, candidate, workload, rng) == PlacementOutcome::Placed
            {
                placed += 1;
            }
        }
        assert_eq!(
            placed as usize,
            candidate.sessions_for_course(&course.id),
            "placement bookkeeping out of sync for {}",
            course.id
        );

        for _ in placed..required {
            candidate
                .conflicts
                .push(crate::models::ConflictRecord::unresolved_session(format!(
                    "could not place a session of course {} within the attempt budget",
                    course.id
                )));
        }
    }

    /// One random placement attempt: pick a day, pick a free window on
    /// it, then attach a faculty and a room.
    fn try_place_session<R: Rng>(
        &self,
        course: &CourseRequirement,
        candidate: &mut ScheduleCandidate,
        workload: &mut HashMap<String, u32>,
        rng: &mut R,
    ) -> PlacementOutcome {
        let day = Weekday::WEEK[rng.random_range(0..Weekday::WEEK.len())];
        let schedule = candidate.day(day);
        if schedule.sessions.len() >= self.constraints.max_sessions_per_day {
            return PlacementOutcome::Unresolved(PlacementFailure::DayFull);
        }

        let duration = course.session_minutes(self.constraints.slot_minutes);
        let free = self
            .calendar
            .free_windows(&schedule.booked_windows(), duration);
        if free.is_empty() {
            return PlacementOutcome::Unresolved(PlacementFailure::NoFreeWindow);
        }
        let window = free[rng.random_range(0..free.len())];

        let faculty_id = self.select_faculty(course, day, &window, workload);
        let room_id = self.select_room(course, day, &window);

        if let Some(id) = &faculty_id {
            *workload.entry(id.clone()).or_insert(0) += u32::from(duration);
        } else {
            candidate
                .conflicts
                .push(missing_faculty_record(&course.id, day, window.start_min));
        }
        if room_id.is_none() {
            candidate
                .conflicts
                .push(missing_room_record(&course.id, day, window.start_min));
        }

        candidate.day_mut(day).sessions.push(Assignment {
            start_min: window.start_min,
            end_min: window.end_min,
            course_id: course.id.clone(),
            faculty_id,
            room_id,
            batch: batch_label(course.batch_size),
            is_lab: course.requires_lab,
        });
        PlacementOutcome::Placed
    }

    /// Picks a faculty for the session, in three tiers:
    ///
    /// 1. the course's ranked preferences, strongest priority first;
    /// 2. faculty listing the course among their preferred courses,
    ///    least-loaded first;
    /// 3. same-department faculty, least-loaded first.
    ///
    /// Each tier filters by blackout availability and the weekly-hour
    /// cap against the workload accumulated so far in this candidate.
    /// Ties break by id for determinism under a fixed seed.
    fn select_faculty(
        &self,
        course: &CourseRequirement,
        day: Weekday,
        window: &TimeRange,
        workload: &HashMap<String, u32>,
    ) -> Option<String> {
        let duration = u32::from(window.duration_min());
        let usable = |f: &&FacultyProfile| {
            f.is_available(day, window)
                && workload.get(&f.id).copied().unwrap_or(0) + duration <= f.weekly_capacity_min()
        };
        let load = |f: &&FacultyProfile| workload.get(&f.id).copied().unwrap_or(0);

        let mut ranked: Vec<&crate::models::FacultyPreference> =
            course.faculty_preferences.iter().collect();
        ranked.sort_by_key(|p| p.priority);
        for pref in ranked {
            let found = self
                .faculties
                .iter()
                .find(|f| f.id == pref.faculty_id)
                .filter(usable);
            if let Some(f) = found {
                return Some(f.id.clone());
            }
        }

        let preferring = self
            .faculties
            .iter()
            .filter(|f| f.prefers(&course.id))
            .filter(usable)
            .min_by_key(|f| (load(&f), f.id.clone()));
        if let Some(f) = preferring {
            return Some(f.id.clone());
        }

        self.faculties
            .iter()
            .filter(|f| f.department == course.department)
            .filter(usable)
            .min_by_key(|f| (load(&f), f.id.clone()))
            .map(|f| f.id.clone())
    }

    /// Picks the tightest-fitting suitable room available in the window.
    /// Ties break by id.
    fn select_room(&self, course: &CourseRequirement, day: Weekday, window: &TimeRange) -> Option<String> {
        self.rooms
            .iter()
            .filter(|r| r.suits(course) && r.is_available(day, window))
            .min_by_key(|r| (r.capacity, r.id.clone()))
            .map(|r| r.id.clone())
    }
}

/// Label for the student group a session serves.
fn batch_label(batch_size: u32) -> String {
    if batch_size > SPLIT_THRESHOLD {
        "Multiple".to_string()
    } else {
        "A".to_string()
    }
}
