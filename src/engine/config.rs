//! Engine configuration.
//!
//! [`EngineConfig`] holds all parameters that control the evolutionary
//! loop.

/// Configuration for the evolution engine.
///
/// Controls population size, operator rates, termination conditions,
/// and parallelism.
///
/// # Defaults
///
/// ```
/// use timetabler::engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use timetabler::engine::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_population_size(100)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Maximum number of generations. Zero is allowed and returns the
    /// best of the initial population unchanged.
    pub max_generations: usize,

    /// Probability of mutating an offspring (0.0-1.0).
    pub mutation_rate: f64,

    /// Tournament size for parent selection.
    pub tournament_size: usize,

    /// Fitness at which the run stops early as an exact optimum.
    ///
    /// `None` disables the early exit.
    pub target_fitness: Option<f64>,

    /// Generations without improvement before stopping. 0 disables.
    pub stagnation_limit: usize,

    /// Optional wall-clock budget in milliseconds.
    ///
    /// Checked at the start of each generation, so the actual runtime
    /// may exceed the limit by one generation's worth of work.
    pub time_limit_ms: Option<u64>,

    /// Whether to evaluate individuals in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            mutation_rate: 0.1,
            tournament_size: 3,
            target_fitness: None,
            stagnation_limit: 0,
            time_limit_ms: None,
            parallel: true,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate, clamped to [0, 1].
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k.max(1);
        self
    }

    /// Sets the early-exit target fitness.
    pub fn with_target_fitness(mut self, target: f64) -> Self {
        self.target_fitness = Some(target);
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
