//! Crossover and mutation operators.
//!
//! Both operators produce structurally valid candidates and mark
//! derived state stale; the engine re-evaluates every offspring.

use rand::Rng;

use crate::models::{Calendar, FacultyProfile, RoomProfile, ScheduleCandidate};

/// Day-level single-point crossover.
///
/// The child takes days `[0, cut)` from the first parent and days
/// `[cut, len)` from the second. The cut is a day index, so the child
/// always carries at least the last day from the second parent.
/// Assignments are copied by value; the child shares nothing with
/// either parent.
pub fn day_crossover<R: Rng>(
    a: &ScheduleCandidate,
    b: &ScheduleCandidate,
    rng: &mut R,
) -> ScheduleCandidate {
    let mut child = a.clone();
    let cut = rng.random_range(0..child.days.len());
    for (day, donor) in child.days.iter_mut().zip(&b.days).skip(cut) {
        day.sessions = donor.sessions.clone();
    }
    child.invalidate();
    child
}

/// Relocation mutation: moves one randomly chosen session to a random
/// free window on its day.
///
/// Target windows respect the assigned faculty's and room's blackout
/// lists, so a relocation never breaks the availability the session
/// was placed under. No-op when the chosen day is empty or no
/// admissible window exists. The session keeps its course, faculty,
/// room, and duration; only the time moves.
pub fn relocate_mutation<R: Rng>(
    candidate: &mut ScheduleCandidate,
    calendar: &Calendar,
    faculties: &[FacultyProfile],
    rooms: &[RoomProfile],
    rng: &mut R,
) {
    let day_index = rng.random_range(0..candidate.days.len());
    let day = &candidate.days[day_index];
    if day.sessions.is_empty() {
        return;
    }
    let weekday = day.day;
    let session_index = rng.random_range(0..day.sessions.len());
    let session = &day.sessions[session_index];
    let duration = session.duration_min();
    let faculty = session
        .faculty_id
        .as_deref()
        .and_then(|id| faculties.iter().find(|f| f.id == id));
    let room = session
        .room_id
        .as_deref()
        .and_then(|id| rooms.iter().find(|r| r.id == id));

    // Free windows relative to the other sessions on the day; the
    // moving session's own slot is a legal destination
    let booked: Vec<_> = day
        .sessions
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != session_index)
        .map(|(_, s)| s.window())
        .collect();
    let free: Vec<_> = calendar
        .free_windows(&booked, duration)
        .into_iter()
        .filter(|w| faculty.is_none_or(|f| f.is_available(weekday, w)))
        .filter(|w| room.is_none_or(|r| r.is_available(weekday, w)))
        .collect();
    if free.is_empty() {
        return;
    }

    let target = free[rng.random_range(0..free.len())];
    let session = &mut candidate.days[day_index].sessions[session_index];
    session.start_min = target.start_min;
    session.end_min = target.end_min;
    candidate.invalidate();
}
