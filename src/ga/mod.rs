//! Genetic-algorithm layer for timetable optimization.
//!
//! Plugs the timetabling domain into the generic evolution engine:
//! candidate construction, conflict detection, the crossover and
//! mutation operators, and the [`Problem`](crate::engine::Problem)
//! implementation tying them together.

mod builder;
mod conflicts;
mod operators;
mod problem;

pub use builder::CandidateBuilder;
pub use conflicts::ConflictDetector;
pub use operators::{day_crossover, relocate_mutation};
pub use problem::{TimetableProblem, CONFLICT_PENALTY, MAX_SCORE};
