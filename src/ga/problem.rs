//! Timetabling problem wired into the evolution engine.
//!
//! Owns the problem inputs and implements [`Problem`] over
//! [`ScheduleCandidate`]: random construction via the candidate
//! builder, fitness evaluation via the conflict detector, and the
//! day-crossover and relocation-mutation operators.

use log::debug;
use rand::Rng;

use crate::engine::{Individual, Problem};
use crate::models::{
    Calendar, CourseRequirement, FacultyProfile, RoomProfile, ScheduleCandidate,
    ScheduleConstraints,
};

use super::builder::CandidateBuilder;
use super::conflicts::ConflictDetector;
use super::operators::{day_crossover, relocate_mutation};

/// Perfect score for a conflict-free timetable.
pub const MAX_SCORE: i32 = 100;

/// Score deducted per detected conflict.
pub const CONFLICT_PENALTY: i32 = 10;

/// A complete timetabling problem instance.
#[derive(Debug, Clone)]
pub struct TimetableProblem {
    courses: Vec<CourseRequirement>,
    faculties: Vec<FacultyProfile>,
    rooms: Vec<RoomProfile>,
    constraints: ScheduleConstraints,
    calendar: Calendar,
    detector: ConflictDetector,
}

impl TimetableProblem {
    pub fn new(
        courses: Vec<CourseRequirement>,
        faculties: Vec<FacultyProfile>,
        rooms: Vec<RoomProfile>,
        constraints: ScheduleConstraints,
    ) -> Self {
        let calendar = Calendar::from_constraints(&constraints);
        let detector = ConflictDetector::new(&courses, constraints.slot_minutes);
        Self {
            courses,
            faculties,
            rooms,
            constraints,
            calendar,
            detector,
        }
    }

    /// Scores a candidate and refreshes its conflict report.
    ///
    /// Conflicts are recomputed from the assignments on every call, so
    /// stale reports left by construction or operators never leak into
    /// the score. `score = 100 - 10 * conflicts`, clamped to [0, 100].
    pub fn score(&self, candidate: &mut ScheduleCandidate) -> i32 {
        let conflicts = self.detector.detect(candidate);
        let score = (MAX_SCORE - CONFLICT_PENALTY * conflicts.len() as i32).clamp(0, MAX_SCORE);
        candidate.conflicts = conflicts;
        candidate.score = score;
        score
    }
}

impl Individual for ScheduleCandidate {
    type Fitness = i32;

    fn fitness(&self) -> i32 {
        self.score
    }

    fn set_fitness(&mut self, fitness: i32) {
        self.score = fitness;
    }
}

impl Problem for TimetableProblem {
    type Individual = ScheduleCandidate;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> ScheduleCandidate {
        CandidateBuilder::new(
            &self.courses,
            &self.faculties,
            &self.rooms,
            &self.calendar,
            &self.constraints,
        )
        .build(rng)
    }

    fn evaluate(&self, candidate: &mut ScheduleCandidate) -> i32 {
        self.score(candidate)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &ScheduleCandidate,
        parent2: &ScheduleCandidate,
        rng: &mut R,
    ) -> ScheduleCandidate {
        day_crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, candidate: &mut ScheduleCandidate, rng: &mut R) {
        relocate_mutation(candidate, &self.calendar, &self.faculties, &self.rooms, rng);
    }

    fn on_generation(&self, generation: usize, best_fitness: i32) {
        debug!("generation {generation}: best score {best_fitness}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{create_rng, EngineConfig, Evolution};
    use crate::models::{hm, Assignment, ConflictKind, TimeRange, Weekday};

    fn sample_problem() -> TimetableProblem {
        let courses = vec![
            CourseRequirement::new("CS201", "CSE", 3)
                .with_name("Data Structures")
                .with_weekly_hours(3),
            CourseRequirement::new("CS202", "CSE", 3)
                .with_name("Discrete Mathematics")
                .with_weekly_hours(2),
        ];
        let faculties = vec![
            FacultyProfile::new("F1", "CSE").with_preferred_course("CS201"),
            FacultyProfile::new("F2", "CSE").with_preferred_course("CS202"),
        ];
        let rooms = vec![
            RoomProfile::classroom("R101", 70),
            RoomProfile::classroom("R102", 70),
        ];
        TimetableProblem::new(courses, faculties, rooms, ScheduleConstraints::default())
    }

    fn assignment(course: &str, faculty: &str, room: &str, start: u16) -> Assignment {
        Assignment {
            start_min: start,
            end_min: start + 60,
            course_id: course.into(),
            faculty_id: Some(faculty.into()),
            room_id: Some(room.into()),
            batch: "A".into(),
            is_lab: false,
        }
    }

    #[test]
    fn test_conflict_free_candidate_scores_max() {
        let problem = sample_problem();
        let mut cand = ScheduleCandidate::new(ScheduleConstraints::default());
        for day in [Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday] {
            cand.day_mut(day)
                .sessions
                .push(assignment("CS201", "F1", "R101", hm(9, 0)));
        }
        cand.day_mut(Weekday::Thursday)
            .sessions
            .push(assignment("CS202", "F2", "R101", hm(10, 0)));
        cand.day_mut(Weekday::Friday)
            .sessions
            .push(assignment("CS202", "F2", "R101", hm(10, 0)));

        assert_eq!(problem.score(&mut cand), MAX_SCORE);
        assert!(cand.is_conflict_free());
    }

    #[test]
    fn test_each_conflict_costs_ten_points() {
        let problem = sample_problem();
        let mut cand = ScheduleCandidate::new(ScheduleConstraints::default());
        // Both courses fully placed, but two sessions clash on faculty
        // and room simultaneously
        cand.day_mut(Weekday::Monday)
            .sessions
            .push(assignment("CS201", "F1", "R101", hm(9, 0)));
        cand.day_mut(Weekday::Monday)
            .sessions
            .push(assignment("CS202", "F1", "R101", hm(9, 0)));
        cand.day_mut(Weekday::Tuesday)
            .sessions
            .push(assignment("CS201", "F1", "R101", hm(9, 0)));
        cand.day_mut(Weekday::Wednesday)
            .sessions
            .push(assignment("CS201", "F1", "R101", hm(9, 0)));
        cand.day_mut(Weekday::Thursday)
            .sessions
            .push(assignment("CS202", "F2", "R102", hm(10, 0)));

        // One faculty clash plus one room clash → 100 - 20
        assert_eq!(problem.score(&mut cand), 80);
        assert_eq!(cand.conflicts.len(), 2);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let problem = sample_problem();
        let mut cand = ScheduleCandidate::new(ScheduleConstraints::default());
        // Twelve copies of one course at the same slot: a pile-up of
        // student clashes plus count mismatches, far past ten conflicts
        for _ in 0..12 {
            cand.day_mut(Weekday::Monday)
                .sessions
                .push(assignment("CS201", "F1", "R101", hm(9, 0)));
        }

        assert_eq!(problem.score(&mut cand), 0);
        assert!(cand.conflicts.len() > 10);
    }

    #[test]
    fn test_evaluation_replaces_stale_conflicts() {
        let problem = sample_problem();
        let mut cand = ScheduleCandidate::new(ScheduleConstraints::default());
        cand.conflicts.push(
            crate::models::ConflictRecord::faculty_double_booked("stale from construction"),
        );

        problem.score(&mut cand);
        // Only the genuine shortfall conflicts remain
        assert!(cand
            .conflicts
            .iter()
            .all(|c| c.kind == ConflictKind::Time));
    }

    #[test]
    fn test_evaluation_is_pure() {
        let problem = sample_problem();
        let mut cand = problem.create_individual(&mut create_rng(13));

        let first = problem.score(&mut cand);
        let first_conflicts = cand.conflicts.clone();
        let second = problem.score(&mut cand);

        assert_eq!(first, second);
        assert_eq!(first_conflicts, cand.conflicts);
    }

    #[test]
    fn test_created_individuals_are_unevaluated() {
        let problem = sample_problem();
        let cand = problem.create_individual(&mut create_rng(17));
        assert_eq!(cand.fitness(), i32::MIN);
        assert_eq!(cand.total_sessions(), 5);
    }

    #[test]
    fn test_full_run_reaches_perfect_schedule() {
        // Small instance with ample rooms and faculty; the engine
        // should find a conflict-free timetable well within 100
        // generations
        let problem = sample_problem();
        let config = EngineConfig::default()
            .with_population_size(40)
            .with_max_generations(100)
            .with_target_fitness(f64::from(MAX_SCORE))
            .with_seed(99);

        let result = Evolution::run(&problem, &config);

        assert_eq!(result.best_fitness, MAX_SCORE);
        assert!(result.reached_target);
        assert!(result.best.is_conflict_free());
        assert_eq!(result.best.sessions_for_course("CS201"), 3);
        assert_eq!(result.best.sessions_for_course("CS202"), 2);
    }

    #[test]
    fn test_evolved_sessions_respect_faculty_blackout() {
        // F1 is the only faculty and cannot teach afternoons; no
        // amount of mutation may move a session into the blackout
        let mut f1 = FacultyProfile::new("F1", "CSE");
        for &day in &Weekday::WEEK {
            f1 = f1.with_unavailable(day, TimeRange::new(hm(13, 0), hm(17, 0)));
        }
        let courses = vec![CourseRequirement::new("CS201", "CSE", 3).with_weekly_hours(3)];
        let rooms = vec![RoomProfile::classroom("R101", 70)];
        let problem =
            TimetableProblem::new(courses, vec![f1], rooms, ScheduleConstraints::default());
        let config = EngineConfig::default()
            .with_population_size(20)
            .with_max_generations(30)
            .with_mutation_rate(1.0)
            .with_seed(19);

        let result = Evolution::run(&problem, &config);

        for day in &result.best.days {
            for s in &day.sessions {
                if s.faculty_id.as_deref() == Some("F1") {
                    assert!(
                        s.start_min < hm(13, 0),
                        "session at {} sits inside the faculty blackout",
                        s.start_min
                    );
                }
            }
        }
    }

    #[test]
    fn test_zero_generations_returns_evaluated_initial_best() {
        let problem = sample_problem();
        let config = EngineConfig::default()
            .with_population_size(10)
            .with_max_generations(0)
            .with_seed(7);

        let result = Evolution::run(&problem, &config);

        assert_eq!(result.generations, 0);
        assert!(result.best_fitness >= 0);
        assert!(result.best_fitness <= MAX_SCORE);
        assert_eq!(result.best.score, result.best_fitness);
    }
}
