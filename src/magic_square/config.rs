//! Magic-square configuration.

use crate::error::ConfigError;
use crate::ga::GaConfig;

/// Configuration for the magic-square search.
///
/// # Defaults
///
/// ```
/// use u_evopuzzle::magic_square::MagicSquareConfig;
///
/// let config = MagicSquareConfig::default();
/// assert_eq!(config.dimension, 10);
/// assert_eq!(config.nested_grid_size, 3);
/// assert_eq!(config.search_threshold, 10);
/// assert_eq!(config.ga.population_size, 900_000);
/// assert_eq!(config.ga.selection_size, 90_000);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagicSquareConfig {
    /// Side length `n` of the outer grid. Genes are permutations of
    /// `1..=n²`.
    pub dimension: usize,

    /// Side length `m` of the nested magic square being searched for.
    pub nested_grid_size: usize,

    /// Outer deviation at or below which the nested scan runs.
    pub search_threshold: i64,

    /// Population parameters.
    pub ga: GaConfig,
}

impl Default for MagicSquareConfig {
    fn default() -> Self {
        Self {
            dimension: 10,
            nested_grid_size: 3,
            search_threshold: 10,
            ga: GaConfig::default()
                .with_population_size(900_000)
                .with_selection_size(90_000),
        }
    }
}

impl MagicSquareConfig {
    /// Sets the outer grid size.
    pub fn with_dimension(mut self, n: usize) -> Self {
        self.dimension = n;
        self
    }

    /// Sets the nested grid size.
    pub fn with_nested_grid_size(mut self, m: usize) -> Self {
        self.nested_grid_size = m;
        self
    }

    /// Sets the nested-scan threshold.
    pub fn with_search_threshold(mut self, threshold: i64) -> Self {
        self.search_threshold = threshold;
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
        if self.nested_grid_size == 0 || self.nested_grid_size > self.dimension {
            return Err(ConfigError::NestedGridSize {
                nested: self.nested_grid_size,
                dimension: self.dimension,
            });
        }
        self.ga.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> MagicSquareConfig {
        MagicSquareConfig::default()
            .with_population_size(100)
            .with_selection_size(10)
    }

    #[test]
    fn test_default_validates() {
        assert!(MagicSquareConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = small()
            .with_dimension(5)
            .with_nested_grid_size(2)
            .with_search_threshold(-1);
        assert_eq!(config.dimension, 5);
        assert_eq!(config.nested_grid_size, 2);
        assert_eq!(config.search_threshold, -1);
        assert_eq!(config.ga.population_size, 100);
        assert_eq!(config.ga.selection_size, 10);
    }

    #[test]
    fn test_with_ga_replaces_population_parameters() {
        let config = small().with_ga(GaConfig::default().with_seed(3));
        assert_eq!(config.ga.population_size, 100);
        assert_eq!(config.ga.seed, Some(3));
    }

    #[test]
    fn test_validate_zero_dimension() {
        let config = small().with_dimension(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDimension));
    }

    #[test]
    fn test_validate_accepts_tiny_grids() {
        assert!(small().with_dimension(1).with_nested_grid_size(1).validate().is_ok());
        assert!(small().with_dimension(2).with_nested_grid_size(1).validate().is_ok());
        assert!(small().with_dimension(2).with_nested_grid_size(2).validate().is_ok());
    }

    #[test]
    fn test_validate_nested_grid_bounds() {
        assert!(small().with_nested_grid_size(0).validate().is_err());
        assert!(small().with_nested_grid_size(11).validate().is_err());
        assert!(small().with_nested_grid_size(1).validate().is_ok());
        assert!(small().with_nested_grid_size(10).validate().is_ok());
    }

    #[test]
    fn test_validate_delegates_to_ga() {
        let config = small().with_selection_size(11);
        assert_eq!(config.validate(), Err(ConfigError::SelectionOdd(11)));
    }
}
