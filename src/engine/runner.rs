//! Evolutionary loop execution.
//!
//! [`Evolution`] orchestrates the complete process: initialization →
//! evaluation → selection → crossover → mutation → repeat, tracking the
//! best individual ever seen across all generations.

use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use super::config::EngineConfig;
use super::selection::breeding_pool;
use super::types::{Fitness, Individual, Problem};
use super::create_rng;

/// Result of an evolution run.
///
/// Contains the best individual found across every generation
/// inspected, along with statistics about the run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<I: Individual> {
    /// The best individual seen during the entire run, not merely the
    /// final generation's best.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run stopped early at the target fitness.
    pub reached_target: bool,

    /// Whether the run stopped due to stagnation.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best-ever fitness at the end of each generation (index 0 is the
    /// initial population).
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = EngineConfig::default().with_seed(42);
/// let result = Evolution::run(&problem, &config);
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct Evolution;

impl Evolution {
    /// Runs the optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`EngineConfig::validate`] first to get a descriptive error).
    pub fn run<P: Problem>(problem: &P, config: &EngineConfig) -> EvolutionResult<P::Individual> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the optimization with an optional cancellation token.
    ///
    /// If `cancel` is set to `true` mid-run, the loop stops at the end
    /// of the current generation and returns the best found so far.
    pub fn run_with_cancel<P: Problem>(
        problem: &P,
        config: &EngineConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> EvolutionResult<P::Individual> {
        config.validate().expect("invalid EngineConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        let started = Instant::now();

        // Generation 0
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel);

        let mut best = find_best(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness().to_f64());

        let mut generations = 0usize;
        let mut reached_target = at_target(config, &best);
        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;

        while generations < config.max_generations && !reached_target {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = config.time_limit_ms {
                if started.elapsed().as_millis() as u64 >= limit {
                    debug!("time budget of {limit}ms exhausted after {generations} generations");
                    break;
                }
            }

            // Breeding pool of half the population via tournaments
            let pool = breeding_pool(&population, config.tournament_size, &mut rng);

            // Offspring: random parent pairs, crossover, then mutation
            let mut next_gen: Vec<P::Individual> = Vec::with_capacity(config.population_size);
            while next_gen.len() < config.population_size {
                let p1 = &pool[rng.random_range(0..pool.len())];
                let p2 = &pool[rng.random_range(0..pool.len())];

                let mut child = problem.crossover(p1, p2, &mut rng);
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    problem.mutate(&mut child, &mut rng);
                }
                next_gen.push(child);
            }

            evaluate_population(problem, &mut next_gen, config.parallel);
            population = next_gen;
            generations += 1;

            // Best-ever tracking across generations
            let gen_best = find_best(&population);
            if gen_best.fitness() > best.fitness() {
                best = gen_best.clone();
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            fitness_history.push(best.fitness().to_f64());

            problem.on_generation(generations, best.fitness());
            debug!(
                "generation {generations}: best fitness {:.1}",
                best.fitness().to_f64()
            );

            if at_target(config, &best) {
                reached_target = true;
            } else if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        info!(
            "evolution finished after {generations} generation(s), best fitness {:.1}",
            best.fitness().to_f64()
        );

        EvolutionResult {
            best_fitness: best.fitness(),
            best,
            generations,
            reached_target,
            stagnated,
            cancelled,
            fitness_history,
        }
    }
}

fn at_target<I: Individual>(config: &EngineConfig, best: &I) -> bool {
    config
        .target_fitness
        .is_some_and(|t| best.fitness().to_f64() >= t)
}

/// Evaluates all individuals, refreshing fitness and derived state.
fn evaluate_population<P: Problem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        for ind in population.iter_mut() {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        }
    }
}

/// Finds the individual with the highest fitness.
fn find_best<I: Individual>(population: &[I]) -> &I {
    population
        .iter()
        .max_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population must not be empty")
}
