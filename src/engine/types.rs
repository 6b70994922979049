//! Core trait definitions for the evolution engine.
//!
//! [`Individual`] and [`Problem`] define the contract between the
//! generic evolutionary loop and the timetabling problem plugged into
//! it. The engine maximizes: higher fitness is better.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Higher fitness is considered better (maximization).
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// The worst possible fitness, used for unevaluated individuals.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and target checks.
    fn to_f64(self) -> f64;
}

impl Fitness for i32 {
    fn worst() -> Self {
        i32::MIN
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the population.
///
/// Individuals carry their own fitness. The engine calls
/// [`Problem::evaluate`] and stores the result via
/// [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness after evaluation.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines an optimization problem for the evolution engine.
///
/// Covers initialization, evaluation, and the genetic operators.
/// Must be `Send + Sync` because the engine may evaluate individuals
/// in parallel with rayon.
pub trait Problem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual for generation zero.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    ///
    /// Takes `&mut` so implementations can refresh derived state on the
    /// individual (e.g. a conflict report) alongside the score. The
    /// engine may call this in parallel across the population.
    fn evaluate(&self, individual: &mut Self::Individual)
        -> <Self::Individual as Individual>::Fitness;

    /// Produces one offspring by recombining two parents.
    ///
    /// The default implementation clones parent1 (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Mutates an individual in place. Default is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called at the end of each generation with the best fitness so far.
    ///
    /// Useful for logging or adaptive control. Default is a no-op.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}
