//! Gene-level crossover and mutation operators.
//!
//! These operate on `&[u32]` genes and know nothing about boards. Puzzle
//! modules compose them into their [`PuzzleProblem`](super::PuzzleProblem)
//! implementations.
//!
//! # Crossover Operators
//!
//! - [`band_recombinations`]: three segment rearrangements of one parent
//!   around a fixed band; multiset-preserving
//! - [`one_point_crossover`]: classic head/tail swap between two parents
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: exchange two random positions, O(1)
//! - [`reset_mutation`]: overwrite one random position, O(1)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

use super::types::Gene;

// ============================================================================
// Crossover operators
// ============================================================================

/// Draws a band start for [`band_recombinations`] on a gene of `stride²`
/// values laid out as rows of length `stride`.
///
/// Candidates are drawn uniformly from `[stride, stride² − stride)` and
/// rejected until one lands on a row boundary, so the band is a full
/// interior row: never the first, never the last.
///
/// Grids with fewer than three rows have no interior row; the band is then
/// the last row, and a single-cell grid recombines into copies of itself.
pub fn interior_row_cut<R: Rng>(stride: usize, rng: &mut R) -> usize {
    if stride < 3 {
        return stride.saturating_sub(1) * stride;
    }
    let upper = stride * stride - stride;
    loop {
        let cut = rng.random_range(stride..upper);
        if cut % stride == 0 {
            return cut;
        }
    }
}

/// Rearranges one parent around the band `[cut, cut + band)`.
///
/// With `prefix = parent[..cut]`, `mid = parent[cut..cut + band]` and
/// `suffix = parent[cut + band..]`, returns:
///
/// 1. `suffix ++ mid ++ prefix` (band rotated towards the front)
/// 2. `prefix ++ rev(mid) ++ suffix` (band reversed in place)
/// 3. `rev(prefix) ++ mid ++ rev(suffix)` (flanks reversed)
///
/// Every child reuses the parent's own values, so a permutation stays a
/// permutation without repair.
///
/// # Panics
/// Panics if the band does not fit inside `parent`.
pub fn band_recombinations(parent: &[u32], cut: usize, band: usize) -> [Gene; 3] {
    assert!(cut + band <= parent.len(), "band out of bounds");
    let (prefix, rest) = parent.split_at(cut);
    let (mid, suffix) = rest.split_at(band);

    let rotated: Gene = suffix.iter().chain(mid).chain(prefix).copied().collect();

    let reversed_band: Gene = prefix
        .iter()
        .chain(mid.iter().rev())
        .chain(suffix)
        .copied()
        .collect();

    let reversed_flanks: Gene = prefix
        .iter()
        .rev()
        .chain(mid)
        .chain(suffix.iter().rev())
        .copied()
        .collect();

    [rotated, reversed_band, reversed_flanks]
}

/// One-point crossover at `point`.
///
/// Returns `(p1[..point] ++ p2[point..], p2[..point] ++ p1[point..])`.
///
/// # Panics
/// Panics if parents have different lengths or `point` exceeds them.
pub fn one_point_crossover(parent1: &[u32], parent2: &[u32], point: usize) -> (Gene, Gene) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    assert!(point <= parent1.len(), "crossover point out of bounds");

    let mut child1 = Vec::with_capacity(parent1.len());
    child1.extend_from_slice(&parent1[..point]);
    child1.extend_from_slice(&parent2[point..]);

    let mut child2 = Vec::with_capacity(parent2.len());
    child2.extend_from_slice(&parent2[..point]);
    child2.extend_from_slice(&parent1[point..]);

    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two independently drawn positions.
///
/// The two positions may coincide, leaving the gene unchanged.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(gene: &mut [u32], rng: &mut R) {
    let n = gene.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    gene.swap(i, j);
}

/// Reset mutation: overwrite one random position with a fresh value from
/// `0..alphabet`.
///
/// # Complexity
/// O(1)
pub fn reset_mutation<R: Rng>(gene: &mut [u32], alphabet: u32, rng: &mut R) {
    if gene.is_empty() || alphabet == 0 {
        return;
    }
    let idx = rng.random_range(0..gene.len());
    gene[idx] = rng.random_range(0..alphabet);
}

// ============================================================================
// Helpers
// ============================================================================

/// Whether `gene` is a permutation of `1..=n`.
pub fn is_permutation_of_1_to_n(gene: &[u32], n: usize) -> bool {
    if gene.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in gene {
        let v = v as usize;
        if v == 0 || v > n || seen[v - 1] {
            return false;
        }
        seen[v - 1] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
