//! Configuration errors.
//!
//! Every check runs once, before the search starts. Nothing inside the
//! generation loop returns an error.

use thiserror::Error;

/// Invalid configuration detected by a `validate()` call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board dimension was zero.
    #[error("dimension must be greater than zero")]
    ZeroDimension,

    /// Nested grid does not fit the outer grid.
    #[error("nested grid size {nested} must be between 1 and the dimension {dimension}")]
    NestedGridSize { nested: usize, dimension: usize },

    /// Population cannot be paired.
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// Selection size must pair up exactly.
    #[error("selection_size must be even, got {0}")]
    SelectionOdd(usize),

    /// Selection size below one pair.
    #[error("selection_size must be at least 2, got {0}")]
    SelectionTooSmall(usize),

    /// Selection size above the population it is drawn from.
    #[error("selection_size {selection} exceeds population_size {population}")]
    SelectionExceedsPopulation { selection: usize, population: usize },

    /// Generation cap of zero would never evaluate a generation.
    #[error("max_generations must be positive or None")]
    ZeroMaxGenerations,

    /// Time cap of zero.
    #[error("time_limit_ms must be positive or None")]
    ZeroTimeLimit,
}
