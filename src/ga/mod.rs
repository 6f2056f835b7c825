//! Generic generational GA engine.
//!
//! Puzzles plug in by implementing [`PuzzleProblem`], which supplies
//! encode/decode, fitness, crossover, mutation, the acceptance predicate
//! and the pairing policy. The engine owns the loop: initialization,
//! evaluation, truncation selection, breeding and termination.
//!
//! # Core Types
//!
//! - [`Candidate`]: immutable gene + fitness pair
//! - [`Board`]: square matrix decoded from a gene
//! - [`PuzzleProblem`]: puzzle capability set
//!
//! # Key Types
//!
//! - [`GaConfig`]: population/selection sizes, seed, optional caps
//! - [`GaRunner`]: executes the generational loop
//! - [`GaResult`]: winning candidate, its board and run statistics
//! - [`ProgressObserver`]: one-way per-generation progress stream
//!
//! # Submodules
//!
//! - [`operators`]: reusable gene crossover and mutation operators
//! - [`selection`]: fitness sorting and truncation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, NoProgress, Progress, ProgressObserver, Termination};
pub use types::{Board, Candidate, Fitness, Gene, Pairing, PuzzleProblem};
