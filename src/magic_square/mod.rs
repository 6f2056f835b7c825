//! Magic-square construction.
//!
//! Searches permutations of `1..=n²` laid out row-major on an `n × n`
//! board for one that contains a nested `m × m` magic square.
//!
//! # Operators
//!
//! - **Initialization**: uniform shuffle of `1..=n²`
//! - **Fitness**: four-way concurrent deviation from the magic constant,
//!   plus a nested-window scan once the deviation is small (see
//!   [`board_fitness`])
//! - **Crossover**: six band rearrangements per pair around one random
//!   interior row (the last row on grids smaller than 3 × 3)
//! - **Mutation**: one transposition with probability 0.4
//!
//! Every operator keeps genes permutations of `1..=n²`.
//!
//! # Example
//!
//! ```no_run
//! use u_evopuzzle::magic_square::{self, MagicSquareConfig};
//!
//! let config = MagicSquareConfig::default()
//!     .with_dimension(5)
//!     .with_population_size(20_000)
//!     .with_selection_size(2_000);
//! let result = magic_square::solve(&config).unwrap();
//! assert!(result.best.fitness() < 0);
//! ```

mod config;
mod fitness;
mod problem;

pub use config::MagicSquareConfig;
pub use fitness::{
    board_fitness, deviation, magic_constant, nested_magic_windows, square_total, Deviation,
};
pub use problem::MagicSquare;

use crate::error::ConfigError;
use crate::ga::{GaResult, GaRunner, ProgressObserver};

/// Runs the magic-square search to completion.
pub fn solve(config: &MagicSquareConfig) -> Result<GaResult, ConfigError> {
    let problem = MagicSquare::new(config)?;
    GaRunner::run(&problem, &config.ga)
}

/// Runs the magic-square search, reporting every generation to `observer`.
pub fn solve_with_observer<O>(
    config: &MagicSquareConfig,
    observer: &mut O,
) -> Result<GaResult, ConfigError>
where
    O: ProgressObserver + ?Sized,
{
    let problem = MagicSquare::new(config)?;
    GaRunner::run_with_observer(&problem, &config.ga, observer)
}
