//! Weekly slot calendar.
//!
//! Defines the fixed grid of candidate time slots each working day is
//! divided into, and computes which placement windows are still free
//! given existing bookings. Purely a function of the constraints block;
//! no state, no randomness.

use serde::{Deserialize, Serialize};

use super::{ScheduleConstraints, TimeRange};

/// The daily slot grid derived from a constraints block.
///
/// Slot starts are spaced `slot_minutes` apart across the working
/// window. A slot (or a multi-slot window) is a candidate only if it
/// fits entirely before the end of the working window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    /// Daily teaching window.
    pub working_hours: TimeRange,
    /// Base slot length in minutes.
    pub slot_minutes: u16,
    /// Lunch window excluded from placement.
    pub lunch_break: TimeRange,
    /// Minimum clearance around existing bookings (minutes).
    pub min_gap_minutes: u16,
}

impl Calendar {
    /// Builds the calendar for a constraints block.
    pub fn from_constraints(constraints: &ScheduleConstraints) -> Self {
        Self {
            working_hours: constraints.working_hours,
            slot_minutes: constraints.slot_minutes,
            lunch_break: constraints.lunch_break,
            min_gap_minutes: constraints.min_gap_minutes,
        }
    }

    /// The base slot grid: consecutive `slot_minutes` slots spanning the
    /// working window, keeping only slots that fit entirely within it.
    pub fn slots(&self) -> Vec<TimeRange> {
        self.windows(self.slot_minutes)
    }

    /// Candidate windows of a given duration aligned to the slot grid.
    ///
    /// Multi-slot sessions (e.g. two-slot practicals) use a duration of
    /// several base slots; the window must still fit entirely within
    /// working hours.
    pub fn windows(&self, duration_min: u16) -> Vec<TimeRange> {
        if self.slot_minutes == 0 || duration_min == 0 {
            return Vec::new();
        }

        let mut windows = Vec::new();
        let mut start = self.working_hours.start_min;
        while start + duration_min <= self.working_hours.end_min {
            windows.push(TimeRange::new(start, start + duration_min));
            start += self.slot_minutes;
        }
        windows
    }

    /// Grid windows of `duration_min` that are free given the booked
    /// windows of one day: outside the lunch break and clear of every
    /// booking by at least `min_gap_minutes`.
    pub fn free_windows(&self, booked: &[TimeRange], duration_min: u16) -> Vec<TimeRange> {
        self.windows(duration_min)
            .into_iter()
            .filter(|w| !w.overlaps(&self.lunch_break))
            .filter(|w| !booked.iter().any(|b| self.too_close(w, b)))
            .collect()
    }

    /// Whether a window collides with a booking, counting the gap
    /// clearance on both sides.
    fn too_close(&self, window: &TimeRange, booked: &TimeRange) -> bool {
        let padded = TimeRange::new(
            booked.start_min.saturating_sub(self.min_gap_minutes),
            booked.end_min.saturating_add(self.min_gap_minutes),
        );
        window.overlaps(&padded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hm;

    fn standard() -> Calendar {
        Calendar::from_constraints(&ScheduleConstraints::default())
    }

    #[test]
    fn test_slot_grid() {
        let cal = standard();
        let slots = cal.slots();
        // 08:00-17:00 in 60-minute slots → 9 slots
        assert_eq!(slots.len(), 9);
        assert_eq!(slots[0], TimeRange::new(hm(8, 0), hm(9, 0)));
        assert_eq!(slots[8], TimeRange::new(hm(16, 0), hm(17, 0)));
    }

    #[test]
    fn test_partial_slot_excluded() {
        let constraints = ScheduleConstraints {
            working_hours: TimeRange::new(hm(8, 0), hm(10, 30)),
            ..ScheduleConstraints::default()
        };
        let cal = Calendar::from_constraints(&constraints);
        // 10:00-11:00 would overrun 10:30, so only two slots remain
        assert_eq!(cal.slots().len(), 2);
    }

    #[test]
    fn test_double_slot_windows() {
        let cal = standard();
        let windows = cal.windows(120);
        // Starts 08:00..15:00 hourly → 8 two-hour windows
        assert_eq!(windows.len(), 8);
        assert_eq!(windows[0], TimeRange::new(hm(8, 0), hm(10, 0)));
        assert_eq!(windows[7], TimeRange::new(hm(15, 0), hm(17, 0)));
    }

    #[test]
    fn test_free_windows_exclude_lunch() {
        let cal = standard();
        let free = cal.free_windows(&[], 60);
        // 9 slots minus the 12:00-13:00 lunch slot
        assert_eq!(free.len(), 8);
        assert!(free.iter().all(|w| !w.overlaps(&cal.lunch_break)));
    }

    #[test]
    fn test_free_windows_exclude_booked() {
        let cal = standard();
        let booked = vec![TimeRange::new(hm(9, 0), hm(10, 0))];
        let free = cal.free_windows(&booked, 60);
        assert_eq!(free.len(), 7);
        assert!(!free.contains(&TimeRange::new(hm(9, 0), hm(10, 0))));
        // Adjacent slots survive with zero gap
        assert!(free.contains(&TimeRange::new(hm(8, 0), hm(9, 0))));
        assert!(free.contains(&TimeRange::new(hm(10, 0), hm(11, 0))));
    }

    #[test]
    fn test_free_windows_respect_gap() {
        let constraints = ScheduleConstraints {
            min_gap_minutes: 30,
            ..ScheduleConstraints::default()
        };
        let cal = Calendar::from_constraints(&constraints);
        let booked = vec![TimeRange::new(hm(9, 0), hm(10, 0))];
        let free = cal.free_windows(&booked, 60);
        // Slots touching the 30-minute clearance are gone
        assert!(!free.contains(&TimeRange::new(hm(8, 0), hm(9, 0))));
        assert!(!free.contains(&TimeRange::new(hm(10, 0), hm(11, 0))));
        assert!(free.contains(&TimeRange::new(hm(11, 0), hm(12, 0))));
    }

    #[test]
    fn test_lunch_blocks_spanning_window() {
        let cal = standard();
        let free = cal.free_windows(&[], 120);
        // A two-hour window starting 11:00 would cross lunch
        assert!(!free.contains(&TimeRange::new(hm(11, 0), hm(13, 0))));
        assert!(free.contains(&TimeRange::new(hm(13, 0), hm(15, 0))));
    }

    #[test]
    fn test_fully_booked_day() {
        let cal = standard();
        let booked = cal.free_windows(&[], 60);
        assert!(cal.free_windows(&booked, 60).is_empty());
    }

    #[test]
    fn test_degenerate_config_yields_no_windows() {
        let constraints = ScheduleConstraints {
            slot_minutes: 0,
            ..ScheduleConstraints::default()
        };
        let cal = Calendar::from_constraints(&constraints);
        assert!(cal.slots().is_empty());
        assert!(cal.windows(0).is_empty());
    }
}
