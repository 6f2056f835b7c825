//! N-Queens configuration.

use crate::error::ConfigError;
use crate::ga::GaConfig;

/// Configuration for the N-Queens search.
///
/// # Defaults
///
/// ```
/// use u_evopuzzle::nqueens::NQueensConfig;
///
/// let config = NQueensConfig::default();
/// assert_eq!(config.dimension, 8);
/// assert_eq!(config.ga.population_size, 100);
/// assert_eq!(config.ga.selection_size, 20);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NQueensConfig {
    /// Board side length and number of queens.
    pub dimension: usize,

    /// Population parameters.
    pub ga: GaConfig,
}

impl Default for NQueensConfig {
    fn default() -> Self {
        Self {
            dimension: 8,
            ga: GaConfig::default(),
        }
    }
}

impl NQueensConfig {
    /// Sets the board size.
    pub fn with_dimension(mut self, n: usize) -> Self {
        self.dimension = n;
        self
    }

    /// Sets the initial population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.ga.population_size = n;
        self
    }

    /// Sets the truncation selection size.
    pub fn with_selection_size(mut self, n: usize) -> Self {
        self.ga.selection_size = n;
        self
    }

    /// Replaces the population parameters wholesale.
    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        self.ga.validate()
    }
}
