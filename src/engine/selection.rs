//! Tournament selection.
//!
//! Parents are chosen by repeated tournaments: draw `k` individuals at
//! random with replacement, keep the fittest. Higher `k` means stronger
//! selection pressure; k=3 is the conventional default.
//!
//! # Reference
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use super::types::Individual;

/// Runs one tournament and returns the winner's index.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    assert!(!population.is_empty(), "cannot select from empty population");

    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Builds a breeding pool of `population.len() / 2` members (at least
/// one) via repeated tournaments of size `k`.
///
/// Sampling is with replacement; strong individuals may appear several
/// times. The source population is not modified.
pub fn breeding_pool<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> Vec<I> {
    let target = (population.len() / 2).max(1);
    (0..target)
        .map(|_| population[tournament(population, k, rng)].clone())
        .collect()
}
