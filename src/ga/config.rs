//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use crate::error::ConfigError;

/// Configuration for the path-search genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_hampath::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.tournament_size, 4);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_hampath::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_generations(20)
///     .with_population_size(7)
///     .with_tournament_size(2)
///     .with_mutation_rate(0.2)
///     .with_elitism_rate(0.1)
///     .with_seed(42);
/// assert_eq!(config.elitism_count(), 1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Maximum number of generations. The loop may stop earlier on
    /// convergence.
    pub generations: usize,

    /// Number of genomes in every population.
    pub population_size: usize,

    /// Contestants drawn (with replacement) per tournament.
    ///
    /// May exceed `population_size`.
    pub tournament_size: usize,

    /// Probability of mutating each non-elite offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the population carried forward unchanged (0.0–1.0).
    ///
    /// The elite count is `ceil(population_size * elitism_rate)`.
    pub elitism_rate: f64,

    /// Whether to evaluate fitness in parallel.
    ///
    /// Only effective with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            population_size: 10,
            tournament_size: 4,
            mutation_rate: 0.1,
            elitism_rate: 0.1,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the maximum number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate. Out-of-range values are reported by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elitism rate. Out-of-range values are reported by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_elitism_rate(mut self, rate: f64) -> Self {
        self.elitism_rate = rate;
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of genomes copied verbatim into each next generation.
    pub fn elitism_count(&self) -> usize {
        (self.population_size as f64 * self.elitism_rate).ceil().max(0.0) as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::ZeroTournament);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        if !(0.0..=1.0).contains(&self.elitism_rate) {
            return Err(ConfigError::ElitismRateOutOfRange(self.elitism_rate));
        }
        let elites = self.elitism_count();
        if elites > self.population_size {
            return Err(ConfigError::ElitismExceedsPopulation {
                elites,
                population: self.population_size,
            });
        }
        Ok(())
    }
}
