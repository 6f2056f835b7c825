//! Truncation selection.
//!
//! Ranking is done purely by sort order: the population is stably sorted
//! ascending by fitness and the first `selection_size` candidates survive.
//! There are no niches or species.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Mühlenbein & Schlierkamp-Voosen (1993), "Predictive Models for the
//!   Breeder Genetic Algorithm"

use super::types::Candidate;

/// Stably sorts `population` so the best (lowest) fitness comes first.
///
/// Candidates with equal fitness keep their relative order, which keeps
/// seeded runs reproducible.
pub fn sort_by_fitness(population: &mut [Candidate]) {
    population.sort_by_key(Candidate::fitness);
}

/// Sorts `population` and keeps only the `selection_size` best candidates.
///
/// # Complexity
/// O(n log n)
pub fn truncate(population: &mut Vec<Candidate>, selection_size: usize) {
    sort_by_fitness(population);
    population.truncate(selection_size);
}

/// Whether `population` is sorted ascending by fitness.
pub fn is_ranked(population: &[Candidate]) -> bool {
    population
        .windows(2)
        .all(|w| w[0].fitness() <= w[1].fitness())
}
