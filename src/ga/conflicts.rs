//! Conflict detection.
//!
//! Scans a candidate for double-bookings and unresolved sessions.
//! Detection is deterministic and derived entirely from the candidate's
//! assignments: records are emitted in day order, then slot order,
//! pass by pass (faculty, room, student batch, missing resources,
//! session counts).

use std::collections::HashSet;

use crate::models::{
    format_hm, Assignment, ConflictRecord, CourseRequirement, ScheduleCandidate, Weekday,
};

/// Detects conflicts in schedule candidates.
///
/// Holds the per-course required session counts so that placement
/// shortfalls (and surpluses introduced by crossover) can be reported
/// alongside double-bookings.
#[derive(Debug, Clone)]
pub struct ConflictDetector {
    /// (course_id, required weekly sessions), in input order.
    requirements: Vec<(String, u32)>,
}

impl ConflictDetector {
    /// Creates a detector for a course set and base slot length.
    pub fn new(courses: &[CourseRequirement], slot_minutes: u16) -> Self {
        Self {
            requirements: courses
                .iter()
                .map(|c| (c.id.clone(), c.required_sessions(slot_minutes)))
                .collect(),
        }
    }

    /// Scans a candidate and returns all conflicts found.
    ///
    /// Pure function of the candidate's assignments; calling it twice
    /// without mutation yields the identical list.
    pub fn detect(&self, candidate: &ScheduleCandidate) -> Vec<ConflictRecord> {
        let ordered = ordered_assignments(candidate);
        let mut conflicts = Vec::new();

        // Faculty double-bookings: same (day, start, faculty) seen twice
        let mut seen_faculty: HashSet<(usize, u16, &str)> = HashSet::new();
        for (day, s) in &ordered {
            if let Some(faculty) = &s.faculty_id {
                if !seen_faculty.insert((day.index(), s.start_min, faculty.as_str())) {
                    conflicts.push(ConflictRecord::faculty_double_booked(format!(
                        "faculty {} assigned to multiple sessions on {} at {}",
                        faculty,
                        day,
                        format_hm(s.start_min)
                    )));
                }
            }
        }

        // Room double-bookings: same (day, start, room) seen twice
        let mut seen_room: HashSet<(usize, u16, &str)> = HashSet::new();
        for (day, s) in &ordered {
            if let Some(room) = &s.room_id {
                if !seen_room.insert((day.index(), s.start_min, room.as_str())) {
                    conflicts.push(ConflictRecord::room_double_booked(format!(
                        "room {} double-booked on {} at {}",
                        room,
                        day,
                        format_hm(s.start_min)
                    )));
                }
            }
        }

        // Student batch double-bookings: one course's batch cannot sit
        // in two sessions at the same day and time
        let mut seen_course: HashSet<(usize, u16, &str)> = HashSet::new();
        for (day, s) in &ordered {
            if !seen_course.insert((day.index(), s.start_min, s.course_id.as_str())) {
                conflicts.push(ConflictRecord::batch_double_booked(format!(
                    "batch of course {} booked twice on {} at {}",
                    s.course_id,
                    day,
                    format_hm(s.start_min)
                )));
            }
        }

        // Sessions placed without an eligible faculty or room
        for (day, s) in &ordered {
            if s.faculty_id.is_none() {
                conflicts.push(missing_faculty_record(&s.course_id, *day, s.start_min));
            }
            if s.room_id.is_none() {
                conflicts.push(missing_room_record(&s.course_id, *day, s.start_min));
            }
        }

        // Per-course session counts against requirements
        for (course_id, required) in &self.requirements {
            let placed = candidate.sessions_for_course(course_id) as u32;
            if placed != *required {
                conflicts.push(count_mismatch_record(course_id, placed, *required));
            }
        }

        conflicts
    }
}

/// Assignments in day order, then slot order within each day.
///
/// Sorting is stable, so sessions sharing a start keep placement order.
fn ordered_assignments(candidate: &ScheduleCandidate) -> Vec<(Weekday, &Assignment)> {
    let mut out = Vec::with_capacity(candidate.total_sessions());
    for day in &candidate.days {
        let mut sessions: Vec<&Assignment> = day.sessions.iter().collect();
        sessions.sort_by_key(|s| s.start_min);
        out.extend(sessions.into_iter().map(|s| (day.day, s)));
    }
    out
}

/// Record for a session placed without an eligible faculty.
pub(crate) fn missing_faculty_record(
    course_id: &str,
    day: Weekday,
    start_min: u16,
) -> ConflictRecord {
    ConflictRecord::missing_faculty(format!(
        "no eligible faculty for course {course_id} on {day} at {}",
        format_hm(start_min)
    ))
}

/// Record for a session placed without an eligible room.
pub(crate) fn missing_room_record(course_id: &str, day: Weekday, start_min: u16) -> ConflictRecord {
    ConflictRecord::missing_room(format!(
        "no suitable room for course {course_id} on {day} at {}",
        format_hm(start_min)
    ))
}

/// Record for a course whose placed session count diverges from its
/// requirement.
pub(crate) fn count_mismatch_record(course_id: &str, placed: u32, required: u32) -> ConflictRecord {
    if placed < required {
        ConflictRecord::unresolved_session(format!(
            "course {course_id} has {placed} of {required} required weekly sessions"
        ))
    } else {
        ConflictRecord::batch_double_booked(format!(
            "course {course_id} has {placed} sessions but requires only {required}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        hm, ConflictKind, ScheduleCandidate, ScheduleConstraints, Severity,
    };

    fn assignment(
        course: &str,
        faculty: Option<&str>,
        room: Option<&str>,
        start: u16,
    ) -> Assignment {
        Assignment {
            start_min: start,
            end_min: start + 60,
            course_id: course.into(),
            faculty_id: faculty.map(Into::into),
            room_id: room.map(Into::into),
            batch: "A".into(),
            is_lab: false,
        }
    }

    fn courses(specs: &[(&str, u32)]) -> Vec<CourseRequirement> {
        specs
            .iter()
            .map(|(id, hours)| {
                CourseRequirement::new(*id, "CSE", 1).with_weekly_hours(*hours)
            })
            .collect()
    }

    #[test]
    fn test_clean_candidate_has_no_conflicts() {
        let detector = ConflictDetector::new(&courses(&[("CS1", 1)]), 60);
        let mut cand = ScheduleCandidate::new(ScheduleConstraints::default());
        cand.day_mut(Weekday::Monday)
            .sessions
            .push(assignment("CS1", Some("F1"), Some("R1"), hm(9, 0)));

        assert!(detector.detect(&cand).is_empty());
    }

    #[test]
    fn test_faculty_conflict_reported_once_per_repeat() {
        // Two courses competing for the same faculty at the same slot
        let detector = ConflictDetector::new(&courses(&[("CS1", 1), ("CS2", 1)]), 60);
        let mut cand = ScheduleCandidate::new(ScheduleConstraints::default());
        cand.day_mut(Weekday::Monday)
            .sessions
            .push(assignment("CS1", Some("F1"), Some("R1"), hm(9, 0)));
        cand.day_mut(Weekday::Monday)
            .sessions
            .push(assignment("CS2", Some("F1"), Some("R2"), hm(9, 0)));

        let conflicts = detector.detect(&cand);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::Faculty);
        assert_eq!(conflicts[0].severity, Severity::High);
    }

    #[test]
    fn test_three_way_clash_yields_two_records() {
        let detector = ConflictDetector::new(
            &courses(&[("CS1", 1), ("CS2", 1), ("CS3", 1)]),
            60,
        );
        let mut cand = ScheduleCandidate::new(ScheduleConstraints::default());
        for course in ["CS1", "CS2", "CS3"] {
            cand.day_mut(Weekday::Tuesday).sessions.push(assignment(
                course,
                Some("F1"),
                None,
                hm(10, 0),
            ));
        }

        let faculty_conflicts: Vec<_> = detector
            .detect(&cand)
            .into_iter()
            .filter(|c| c.kind == ConflictKind::Faculty && c.severity == Severity::High)
            .collect();
        // One record per occurrence beyond the first
        assert_eq!(faculty_conflicts.len(), 2);
    }

    #[test]
    fn test_room_conflict() {
        let detector = ConflictDetector::new(&courses(&[("CS1", 1), ("CS2", 1)]), 60);
        let mut cand = ScheduleCandidate::new(ScheduleConstraints::default());
        cand.day_mut(Weekday::Friday)
            .sessions
            .push(assignment("CS1", Some("F1"), Some("R1"), hm(11, 0)));
        cand.day_mut(Weekday::Friday)
            .sessions
            .push(assignment("CS2", Some("F2"), Some("R1"), hm(11, 0)));

        let conflicts = detector.detect(&cand);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::Room);
    }

    #[test]
    fn test_student_batch_conflict() {
        let detector = ConflictDetector::new(&courses(&[("CS1", 2)]), 60);
        let mut cand = ScheduleCandidate::new(ScheduleConstraints::default());
        cand.day_mut(Weekday::Monday)
            .sessions
            .push(assignment("CS1", Some("F1"), Some("R1"), hm(9, 0)));
        cand.day_mut(Weekday::Monday)
            .sessions
            .push(assignment("CS1", Some("F2"), Some("R2"), hm(9, 0)));

        let conflicts = detector.detect(&cand);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::Student);
    }

    #[test]
    fn test_missing_room_and_faculty() {
        let detector = ConflictDetector::new(&courses(&[("CS1", 1)]), 60);
        let mut cand = ScheduleCandidate::new(ScheduleConstraints::default());
        cand.day_mut(Weekday::Monday)
            .sessions
            .push(assignment("CS1", None, None, hm(9, 0)));

        let conflicts = detector.detect(&cand);
        assert_eq!(conflicts.len(), 2);
        assert!(conflicts
            .iter()
            .any(|c| c.kind == ConflictKind::Faculty && c.severity == Severity::Medium));
        assert!(conflicts
            .iter()
            .any(|c| c.kind == ConflictKind::Room && c.severity == Severity::Medium));
    }

    #[test]
    fn test_session_shortfall() {
        let detector = ConflictDetector::new(&courses(&[("CS1", 3)]), 60);
        let mut cand = ScheduleCandidate::new(ScheduleConstraints::default());
        cand.day_mut(Weekday::Monday)
            .sessions
            .push(assignment("CS1", Some("F1"), Some("R1"), hm(9, 0)));

        let conflicts = detector.detect(&cand);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::Time);
        assert_eq!(conflicts[0].severity, Severity::High);
        assert!(conflicts[0].description.contains("1 of 3"));
    }

    #[test]
    fn test_session_surplus_after_crossover() {
        let detector = ConflictDetector::new(&courses(&[("CS1", 1)]), 60);
        let mut cand = ScheduleCandidate::new(ScheduleConstraints::default());
        cand.day_mut(Weekday::Monday)
            .sessions
            .push(assignment("CS1", Some("F1"), Some("R1"), hm(9, 0)));
        cand.day_mut(Weekday::Tuesday)
            .sessions
            .push(assignment("CS1", Some("F1"), Some("R1"), hm(9, 0)));

        let conflicts = detector.detect(&cand);
        assert_eq!(conflicts.len(), 1);
        assert!(conflicts[0].description.contains("requires only 1"));
    }

    #[test]
    fn test_detection_is_deterministic() {
        let detector = ConflictDetector::new(&courses(&[("CS1", 2), ("CS2", 1)]), 60);
        let mut cand = ScheduleCandidate::new(ScheduleConstraints::default());
        cand.day_mut(Weekday::Wednesday)
            .sessions
            .push(assignment("CS1", Some("F1"), Some("R1"), hm(14, 0)));
        cand.day_mut(Weekday::Wednesday)
            .sessions
            .push(assignment("CS2", Some("F1"), Some("R1"), hm(14, 0)));

        let first = detector.detect(&cand);
        let second = detector.detect(&cand);
        assert_eq!(first, second);
    }

    #[test]
    fn test_emission_follows_day_then_slot_order() {
        let detector = ConflictDetector::new(&courses(&[("CS1", 2), ("CS2", 2)]), 60);
        let mut cand = ScheduleCandidate::new(ScheduleConstraints::default());
        // Clash late on Monday, clash early on Monday, clash on Tuesday
        cand.day_mut(Weekday::Monday)
            .sessions
            .push(assignment("CS1", Some("F1"), Some("R1"), hm(15, 0)));
        cand.day_mut(Weekday::Monday)
            .sessions
            .push(assignment("CS2", Some("F1"), Some("R2"), hm(15, 0)));
        cand.day_mut(Weekday::Monday)
            .sessions
            .push(assignment("CS1", Some("F2"), Some("R1"), hm(9, 0)));
        cand.day_mut(Weekday::Monday)
            .sessions
            .push(assignment("CS2", Some("F2"), Some("R2"), hm(9, 0)));
        cand.day_mut(Weekday::Tuesday)
            .sessions
            .push(assignment("CS1", Some("F1"), Some("R1"), hm(9, 0)));
        cand.day_mut(Weekday::Tuesday)
            .sessions
            .push(assignment("CS2", Some("F1"), Some("R2"), hm(9, 0)));

        let faculty: Vec<_> = detector
            .detect(&cand)
            .into_iter()
            .filter(|c| c.kind == ConflictKind::Faculty)
            .collect();
        assert_eq!(faculty.len(), 3);
        // Monday 09:00 before Monday 15:00 before Tuesday 09:00
        assert!(faculty[0].description.contains("monday at 09:00"));
        assert!(faculty[1].description.contains("monday at 15:00"));
        assert!(faculty[2].description.contains("tuesday at 09:00"));
    }
}
