//! N-Queens encoding for the GA engine.

use rand::Rng;

use super::config::NQueensConfig;
use super::fitness::{occupancy, queens_fitness};
use crate::error::ConfigError;
use crate::ga::operators::{one_point_crossover, reset_mutation};
use crate::ga::{Board, Fitness, Gene, Pairing, PuzzleProblem};

/// N-Queens search over row-per-column genes.
///
/// Genes hold `n` values in `0..n` and may repeat; repeated rows are
/// penalised by the fitness rather than repaired.
#[derive(Debug, Clone)]
pub struct NQueens {
    dimension: usize,
}

impl NQueens {
    /// Builds the problem from a validated configuration.
    pub fn new(config: &NQueensConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            dimension: config.dimension,
        })
    }
}

impl PuzzleProblem for NQueens {
    fn name(&self) -> &'static str {
        "n-queens"
    }

    fn create_gene<R: Rng>(&self, rng: &mut R) -> Gene {
        let n = self.dimension as u32;
        (0..n).map(|_| rng.random_range(0..n)).collect()
    }

    fn evaluate(&self, gene: &[u32]) -> Fitness {
        debug_assert_eq!(gene.len(), self.dimension);
        queens_fitness(gene)
    }

    /// Swaps halves at the midpoint, giving exactly two children.
    fn crossover<R: Rng>(&self, parent1: &[u32], parent2: &[u32], _rng: &mut R) -> Vec<Gene> {
        let (child1, child2) = one_point_crossover(parent1, parent2, self.dimension / 2);
        vec![child1, child2]
    }

    fn mutate<R: Rng>(&self, gene: &mut Gene, rng: &mut R) {
        reset_mutation(gene, self.dimension as u32, rng);
    }

    fn decode(&self, gene: &[u32]) -> Board {
        occupancy(gene)
    }

    fn is_solved(&self, fitness: Fitness) -> bool {
        fitness == 0
    }

    fn pairing(&self) -> Pairing {
        Pairing::Ranked
    }
}
