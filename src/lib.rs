//! Evolutionary search for combinatorial puzzles.
//!
//! A generic generational genetic algorithm, instantiated for two
//! puzzles:
//!
//! - **Magic square**: find an `n × n` arrangement of `1..=n²` that
//!   contains a nested `m × m` magic square.
//! - **N-Queens**: place `n` non-attacking queens on an `n × n` board.
//!
//! # Architecture
//!
//! [`ga`] holds the puzzle-agnostic engine. Each puzzle module implements
//! [`ga::PuzzleProblem`] and exposes a `solve` entry point that validates
//! its configuration and runs the engine. Control flow is sequential;
//! evaluation and breeding fan out over rayon, with every stochastic draw
//! seeded from one explicit generator so seeded runs are reproducible.
//!
//! The search is unbounded unless [`ga::GaConfig::max_generations`] or
//! [`ga::GaConfig::time_limit_ms`] is set.

pub mod error;
pub mod ga;
pub mod magic_square;
pub mod nqueens;
pub mod random;

pub use error::ConfigError;
