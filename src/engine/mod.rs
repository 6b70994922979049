//! Generic evolution engine.
//!
//! A domain-agnostic genetic-algorithm loop: plug a [`Problem`]
//! implementation in and the engine handles population lifecycle,
//! tournament selection, operator application, parallel evaluation,
//! and termination (generation cap, exact-optimum early exit,
//! stagnation, wall-clock budget, external cancellation).
//!
//! The engine maximizes: higher fitness is better.

mod config;
mod runner;
pub mod selection;
mod types;

pub use config::EngineConfig;
pub use runner::{Evolution, EvolutionResult};
pub use types::{Fitness, Individual, Problem};

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Creates a seeded random source for a reproducible run.
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
