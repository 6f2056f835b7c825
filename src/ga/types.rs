//! Core type definitions for the GA engine.
//!
//! [`Candidate`] and [`Board`] are the values the engine moves around;
//! [`PuzzleProblem`] is the contract between the generic engine and a
//! puzzle encoding.

use rand::Rng;

/// Integer sequence encoding one candidate solution.
pub type Gene = Vec<u32>;

/// Fitness score. Lower is better.
///
/// Negative values are only produced by puzzles that use them as a
/// "terminal condition met" sentinel.
pub type Fitness = i64;

/// An evaluated candidate solution.
///
/// A candidate never changes after construction: its fitness is computed
/// from its gene once, and a different gene means a different candidate.
///
/// # Examples
///
/// ```
/// use u_evopuzzle::ga::Candidate;
/// use u_evopuzzle::nqueens::{NQueens, NQueensConfig};
///
/// let queens = NQueens::new(&NQueensConfig::default().with_dimension(4)).unwrap();
/// let c = Candidate::evaluated(&queens, vec![1, 3, 0, 2]);
/// assert_eq!(c.gene(), &[1, 3, 0, 2]);
/// assert_eq!(c.fitness(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    gene: Gene,
    fitness: Fitness,
}

impl Candidate {
    /// Pairs a gene with the fitness computed for it. Callers outside the
    /// crate go through [`evaluated`](Self::evaluated).
    pub(crate) fn new(gene: Gene, fitness: Fitness) -> Self {
        Self { gene, fitness }
    }

    /// Evaluates `gene` with `problem` and wraps the result.
    pub fn evaluated<P: PuzzleProblem>(problem: &P, gene: Gene) -> Self {
        let fitness = problem.evaluate(&gene);
        Self::new(gene, fitness)
    }

    /// The encoded solution.
    pub fn gene(&self) -> &[u32] {
        &self.gene
    }

    /// The fitness of [`gene`](Self::gene).
    pub fn fitness(&self) -> Fitness {
        self.fitness
    }
}

/// Square matrix decoded from a gene, stored row-major.
///
/// A board is a view: puzzles rebuild it from the gene whenever it is
/// needed and never store it alongside a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Builds a `size × size` board from row-major cells.
    ///
    /// # Panics
    /// Panics if `cells.len() != size * size`.
    pub fn from_cells(size: usize, cells: Vec<u32>) -> Self {
        assert_eq!(cells.len(), size * size, "board must be square");
        Self { size, cells }
    }

    /// A `size × size` board filled with zeros.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (`row`, `col`).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    /// Overwrites the cell at (`row`, `col`).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row * self.size + col] = value;
    }

    /// Iterates over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks_exact rejects 0; an empty board yields no rows anyway.
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Row-major cell storage.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Copies the `size × size` window whose top-left corner is
    /// (`top`, `left`).
    ///
    /// # Panics
    /// Panics if the window does not fit inside the board.
    pub fn window(&self, top: usize, left: usize, size: usize) -> Board {
        assert!(
            top + size <= self.size && left + size <= self.size,
            "window out of bounds"
        );
        let mut cells = Vec::with_capacity(size * size);
        for row in top..top + size {
            let start = row * self.size + left;
            cells.extend_from_slice(&self.cells[start..start + size]);
        }
        Board { size, cells }
    }
}

/// How parents are paired for crossover each generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pairing {
    /// Shuffle the whole population, then pair neighbours.
    ///
    /// The first breeding round uses the full initial population; every
    /// later round uses the truncated selection.
    Shuffled,

    /// Truncate the initial population to the selection size, then always
    /// pair neighbours in fitness order without reshuffling.
    Ranked,
}

/// Defines a puzzle for the GA engine.
///
/// An implementation supplies the four puzzle-specific capabilities
/// (encode/decode, fitness, crossover, mutate) plus its terminal predicate
/// and pairing policy. Everything else, including the population loop and
/// termination, is handled by [`GaRunner`](super::GaRunner).
///
/// # Thread Safety
///
/// `PuzzleProblem` must be `Send + Sync`: the runner evaluates and breeds
/// candidates in parallel with rayon. Stochastic methods receive their own
/// generator and must not keep shared random state.
pub trait PuzzleProblem: Send + Sync {
    /// Short name used in log records.
    fn name(&self) -> &'static str;

    /// Creates a random gene for the initial population.
    fn create_gene<R: Rng>(&self, rng: &mut R) -> Gene;

    /// Scores `gene`. Must be deterministic and must not modify it.
    fn evaluate(&self, gene: &[u32]) -> Fitness;

    /// Recombines two parents into one or more offspring genes.
    fn crossover<R: Rng>(&self, parent1: &[u32], parent2: &[u32], rng: &mut R) -> Vec<Gene>;

    /// Perturbs an offspring gene before it is evaluated.
    fn mutate<R: Rng>(&self, gene: &mut Gene, rng: &mut R);

    /// Decodes a gene into its board.
    fn decode(&self, gene: &[u32]) -> Board;

    /// Whether `fitness` meets the puzzle's acceptance condition.
    fn is_solved(&self, fitness: Fitness) -> bool;

    /// Pairing policy for the generation loop.
    fn pairing(&self) -> Pairing;
}
