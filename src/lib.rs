//! University timetable optimization via a genetic algorithm.
//!
//! Builds weekly teaching timetables from course requirements, faculty
//! profiles, and room inventories. Candidate timetables evolve under
//! tournament selection, day-level crossover, and session relocation
//! until a conflict-free week appears or the generation budget runs out.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CourseRequirement`, `FacultyProfile`,
//!   `RoomProfile`, `Calendar`, `ScheduleCandidate`, `ConflictRecord`
//! - **`validation`**: Input integrity checks (duplicate IDs, degenerate
//!   constraints, zero-hour courses)
//! - **`engine`**: Generic evolution loop — configuration, tournament
//!   selection, best-ever tracking, parallel evaluation
//! - **`ga`**: The timetabling problem plugged into the engine —
//!   candidate construction, conflict detection, operators, scoring
//! - **`scheduler`**: High-level `generate_timetable` entry point
//!
//! # Example
//!
//! ```
//! use timetabler::engine::EngineConfig;
//! use timetabler::models::{CourseRequirement, FacultyProfile, RoomProfile};
//! use timetabler::scheduler::{generate_timetable, TimetableRequest};
//!
//! let courses = vec![
//!     CourseRequirement::new("CS201", "CSE", 3)
//!         .with_name("Data Structures")
//!         .with_weekly_hours(3),
//! ];
//! let faculties = vec![FacultyProfile::new("F1", "CSE").with_name("Dr. Rao")];
//! let rooms = vec![RoomProfile::classroom("R101", 70)];
//!
//! let request = TimetableRequest::new(courses, faculties, rooms);
//! let config = EngineConfig::default().with_seed(42);
//!
//! let outcome = generate_timetable(&request, &config).unwrap();
//! assert!(outcome.best.score >= 0);
//! ```
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//! - Burke & Petrovic (2002), "Recent research directions in automated
//!   timetabling"

pub mod engine;
pub mod ga;
pub mod models;
pub mod scheduler;
pub mod validation;
