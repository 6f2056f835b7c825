//! Magic-square encoding for the GA engine.

use rand::Rng;

use super::config::MagicSquareConfig;
use super::fitness::board_fitness;
use crate::error::ConfigError;
use crate::ga::operators::{band_recombinations, interior_row_cut, swap_mutation};
use crate::ga::{Board, Fitness, Gene, Pairing, PuzzleProblem};
use crate::random::shuffle;

/// Mutation fires when a roll of `1..=MUTATION_DIE` lands at or below
/// `MUTATION_HITS`.
const MUTATION_DIE: u32 = 10;
const MUTATION_HITS: u32 = 4;

/// Magic-square search over permutations of `1..=n²`.
///
/// The gene is the board in row-major order. A candidate is accepted as
/// soon as its fitness turns negative, i.e. it contains at least one
/// nested `m × m` magic square; the outer board need not be magic itself.
#[derive(Debug, Clone)]
pub struct MagicSquare {
    dimension: usize,
    nested_grid_size: usize,
    search_threshold: i64,
}

impl MagicSquare {
    /// Builds the problem from a validated configuration.
    pub fn new(config: &MagicSquareConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            dimension: config.dimension,
            nested_grid_size: config.nested_grid_size,
            search_threshold: config.search_threshold,
        })
    }

    fn cell_count(&self) -> usize {
        self.dimension * self.dimension
    }
}

impl PuzzleProblem for MagicSquare {
    fn name(&self) -> &'static str {
        "magic-square"
    }

    fn create_gene<R: Rng>(&self, rng: &mut R) -> Gene {
        let mut gene: Gene = (1..=self.cell_count() as u32).collect();
        shuffle(&mut gene, rng);
        gene
    }

    fn evaluate(&self, gene: &[u32]) -> Fitness {
        board_fitness(
            &self.decode(gene),
            self.nested_grid_size,
            self.search_threshold,
        )
    }

    /// Six children per pair: three band rearrangements of each parent
    /// around one shared interior row.
    fn crossover<R: Rng>(&self, parent1: &[u32], parent2: &[u32], rng: &mut R) -> Vec<Gene> {
        let cut = interior_row_cut(self.dimension, rng);
        let [rotated1, reversed_band1, reversed_flanks1] =
            band_recombinations(parent1, cut, self.dimension);
        let [rotated2, reversed_band2, reversed_flanks2] =
            band_recombinations(parent2, cut, self.dimension);
        vec![
            rotated1,
            rotated2,
            reversed_band1,
            reversed_band2,
            reversed_flanks1,
            reversed_flanks2,
        ]
    }

    fn mutate<R: Rng>(&self, gene: &mut Gene, rng: &mut R) {
        if rng.random_range(1..=MUTATION_DIE) <= MUTATION_HITS {
            swap_mutation(gene, rng);
        }
    }

    fn decode(&self, gene: &[u32]) -> Board {
        Board::from_cells(self.dimension, gene.to_vec())
    }

    fn is_solved(&self, fitness: Fitness) -> bool {
        fitness < 0
    }

    fn pairing(&self) -> Pairing {
        Pairing::Shuffled
    }
}
