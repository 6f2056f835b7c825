//! GA configuration.
//!
//! [`GaConfig`] holds the puzzle-independent parameters of the
//! generational loop.

use crate::error::ConfigError;

/// Configuration for the generational loop.
///
/// # Defaults
///
/// ```
/// use u_evopuzzle::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.selection_size, 20);
/// assert!(config.max_generations.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evopuzzle::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(500)
///     .with_selection_size(50)
///     .with_seed(7)
///     .with_max_generations(1_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of candidates created for the initial population.
    pub population_size: usize,

    /// Number of best-ranked candidates kept by truncation selection.
    ///
    /// Must be even: the selected set is consumed in pairs.
    pub selection_size: usize,

    /// Whether to breed and evaluate candidates in parallel using rayon.
    ///
    /// Results for a given seed are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional cap on breeding rounds.
    ///
    /// `None` (the default) runs until the puzzle is solved.
    pub max_generations: Option<usize>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation, so the actual runtime may
    /// exceed the limit by one generation's worth of work.
    ///
    /// `None` disables time-based termination (the default).
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            selection_size: 20,
            parallel: true,
            seed: None,
            max_generations: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the initial population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the truncation selection size.
    pub fn with_selection_size(mut self, n: usize) -> Self {
        self.selection_size = n;
        self
    }

    /// Enables or disables parallel breeding and evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the number of breeding rounds.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.selection_size < 2 {
            return Err(ConfigError::SelectionTooSmall(self.selection_size));
        }
        if self.selection_size % 2 != 0 {
            return Err(ConfigError::SelectionOdd(self.selection_size));
        }
        if self.selection_size > self.population_size {
            return Err(ConfigError::SelectionExceedsPopulation {
                selection: self.selection_size,
                population: self.population_size,
            });
        }
        if self.max_generations == Some(0) {
            return Err(ConfigError::ZeroMaxGenerations);
        }
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }
}
