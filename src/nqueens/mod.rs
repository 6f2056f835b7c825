//! N-Queens placement.
//!
//! Places `n` queens on an `n × n` board so none attack each other. The
//! gene gives one row per column, so only row and diagonal clashes need
//! scoring.
//!
//! # Operators
//!
//! - **Initialization**: `n` independent uniform rows
//! - **Fitness**: row collisions plus diagonal attacks (see
//!   [`queens_fitness`])
//! - **Crossover**: one-point at `n / 2`, two children per pair
//! - **Mutation**: overwrite one position with a fresh random row, always
//!
//! Parents are paired in fitness order; the selected set is never
//! reshuffled.
//!
//! # Example
//!
//! ```
//! use u_evopuzzle::ga::GaConfig;
//! use u_evopuzzle::nqueens::{self, NQueensConfig};
//!
//! let config = NQueensConfig::default()
//!     .with_dimension(4)
//!     .with_ga(GaConfig::default().with_seed(42).with_max_generations(10_000));
//! let result = nqueens::solve(&config).unwrap();
//! if result.is_solved() {
//!     assert_eq!(result.best.fitness(), 0);
//! }
//! ```

mod config;
mod fitness;
mod problem;

pub use config::NQueensConfig;
pub use fitness::{diagonal_attacks, occupancy, queens_fitness, row_collisions};
pub use problem::NQueens;

use crate::error::ConfigError;
use crate::ga::{GaResult, GaRunner, ProgressObserver};

/// Runs the N-Queens search to completion.
pub fn solve(config: &NQueensConfig) -> Result<GaResult, ConfigError> {
    let problem = NQueens::new(config)?;
    GaRunner::run(&problem, &config.ga)
}

/// Runs the N-Queens search, reporting every generation to `observer`.
pub fn solve_with_observer<O>(
    config: &NQueensConfig,
    observer: &mut O,
) -> Result<GaResult, ConfigError>
where
    O: ProgressObserver + ?Sized,
{
    let problem = NQueens::new(config)?;
    GaRunner::run_with_observer(&problem, &config.ga, observer)
}
