//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → ranking → (pairing → crossover →
//! mutation → evaluation → replacement → truncation) → repeat.

use std::time::{Duration, Instant};

use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info, trace};

use super::config::GaConfig;
use super::selection;
use super::types::{Board, Candidate, Fitness, Gene, Pairing, PuzzleProblem};
use crate::error::ConfigError;
use crate::random::{create_rng, rng_from_option, shuffle};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The best candidate met the puzzle's acceptance condition.
    Solved,
    /// [`GaConfig::max_generations`] was reached first.
    MaxGenerations,
    /// [`GaConfig::time_limit_ms`] elapsed first.
    TimeLimit,
}

impl Termination {
    /// Whether the run converged to an accepted solution.
    pub fn converged(self) -> bool {
        matches!(self, Termination::Solved)
    }
}

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Best candidate of the final population.
    pub best: Candidate,

    /// `best` decoded into its board.
    pub board: Board,

    /// Number of completed breeding rounds.
    ///
    /// Zero when the initial population already held a solution.
    pub generations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best fitness of the initial population and after every round.
    pub fitness_history: Vec<Fitness>,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

impl GaResult {
    /// Whether the run ended with an accepted solution.
    pub fn is_solved(&self) -> bool {
        self.termination.converged()
    }
}

/// Snapshot handed to a [`ProgressObserver`] at the start of a generation.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    /// Completed breeding rounds so far.
    pub generation: usize,
    /// Fitness of the current best candidate.
    pub best_fitness: Fitness,
    /// Current best candidate decoded into its board.
    pub board: &'a Board,
    /// Current population, best first.
    pub population: &'a [Candidate],
}

/// Receives progress from a running search.
///
/// Observation is one-way: nothing an observer does feeds back into the
/// engine. Closures taking `&Progress` implement this trait.
pub trait ProgressObserver {
    /// Called once per generation, before breeding.
    fn on_generation(&mut self, progress: &Progress<'_>);
}

impl<F> ProgressObserver for F
where
    F: FnMut(&Progress<'_>),
{
    fn on_generation(&mut self, progress: &Progress<'_>) {
        self(progress)
    }
}

/// Observer that ignores all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_generation(&mut self, _progress: &Progress<'_>) {}
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```ignore
/// let problem = NQueens::new(NQueensConfig::default())?;
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("solved after {} generations", result.generations);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the search until the puzzle is solved or a configured cap is
    /// hit.
    ///
    /// Without caps this only returns once a solution is found.
    pub fn run<P: PuzzleProblem>(problem: &P, config: &GaConfig) -> Result<GaResult, ConfigError> {
        Self::run_with_observer(problem, config, &mut NoProgress)
    }

    /// Runs the search, reporting each generation to `observer`.
    pub fn run_with_observer<P, O>(
        problem: &P,
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<GaResult, ConfigError>
    where
        P: PuzzleProblem,
        O: ProgressObserver + ?Sized,
    {
        config.validate()?;

        let start = Instant::now();
        let mut rng = rng_from_option(config.seed);
        let pairing = problem.pairing();

        info!(
            puzzle = problem.name(),
            population_size = config.population_size,
            selection_size = config.selection_size,
            seed = ?config.seed,
            "starting evolutionary search"
        );

        // 1. Initialize population
        let genes: Vec<Gene> = (0..config.population_size)
            .map(|_| problem.create_gene(&mut rng))
            .collect();

        // 2. Evaluate initial population
        let mut population = evaluate_all(problem, genes, config.parallel);

        // 3. Rank; ranked pairing also starts from the truncated selection
        match pairing {
            Pairing::Shuffled => selection::sort_by_fitness(&mut population),
            Pairing::Ranked => selection::truncate(&mut population, config.selection_size),
        }

        let mut fitness_history = vec![population[0].fitness()];
        let mut generation = 0usize;

        // 4. Generational loop
        let termination = loop {
            let best_fitness = population[0].fitness();

            if problem.is_solved(best_fitness) {
                break Termination::Solved;
            }
            if config.max_generations.is_some_and(|max| generation >= max) {
                break Termination::MaxGenerations;
            }
            if config
                .time_limit_ms
                .is_some_and(|ms| start.elapsed() >= Duration::from_millis(ms))
            {
                break Termination::TimeLimit;
            }

            debug!(
                generation,
                best_fitness,
                population = population.len(),
                "generation"
            );
            let board = problem.decode(population[0].gene());
            observer.on_generation(&Progress {
                generation,
                best_fitness,
                board: &board,
                population: &population,
            });

            if pairing == Pairing::Shuffled {
                shuffle(&mut population, &mut rng);
            }

            let offspring = breed(problem, &population, &mut rng, config.parallel);
            trace!(offspring = offspring.len(), "bred offspring");
            assert!(!offspring.is_empty(), "crossover produced no offspring");

            population = offspring;
            selection::truncate(&mut population, config.selection_size);

            generation += 1;
            fitness_history.push(population[0].fitness());
        };

        let best = population.swap_remove(0);
        let board = problem.decode(best.gene());
        let elapsed = start.elapsed();

        info!(
            puzzle = problem.name(),
            generations = generation,
            best_fitness = best.fitness(),
            termination = ?termination,
            elapsed_ms = elapsed.as_millis() as u64,
            "search finished"
        );

        Ok(GaResult {
            best,
            board,
            generations: generation,
            termination,
            fitness_history,
            elapsed,
        })
    }
}

/// Evaluate every gene, preserving order.
fn evaluate_all<P: PuzzleProblem>(problem: &P, genes: Vec<Gene>, parallel: bool) -> Vec<Candidate> {
    if parallel {
        genes
            .into_par_iter()
            .map(|gene| Candidate::evaluated(problem, gene))
            .collect()
    } else {
        genes
            .into_iter()
            .map(|gene| Candidate::evaluated(problem, gene))
            .collect()
    }
}

/// Pair neighbours, then crossover, mutate and evaluate each pair's
/// offspring.
///
/// One seed per pair is drawn from `rng` up front, in pair order, so the
/// outcome does not depend on how pairs are scheduled across threads. An
/// unpaired trailing parent is dropped.
fn breed<P: PuzzleProblem, R: Rng>(
    problem: &P,
    parents: &[Candidate],
    rng: &mut R,
    parallel: bool,
) -> Vec<Candidate> {
    let seeds: Vec<u64> = (0..parents.len() / 2).map(|_| rng.random()).collect();

    let breed_pair = |pair: &[Candidate], seed: u64| -> Vec<Candidate> {
        let mut pair_rng = create_rng(seed);
        problem
            .crossover(pair[0].gene(), pair[1].gene(), &mut pair_rng)
            .into_iter()
            .map(|mut gene| {
                problem.mutate(&mut gene, &mut pair_rng);
                Candidate::evaluated(problem, gene)
            })
            .collect()
    };

    if parallel {
        parents
            .par_chunks_exact(2)
            .zip(seeds.par_iter())
            .flat_map_iter(|(pair, &seed)| breed_pair(pair, seed))
            .collect()
    } else {
        parents
            .chunks_exact(2)
            .zip(seeds)
            .flat_map(|(pair, seed)| breed_pair(pair, seed))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::operators::one_point_crossover;

    // ---- OneMax over {0, 1}: minimize the number of zeros ----

    struct OneMax {
        n: usize,
        pairing: Pairing,
    }

    impl PuzzleProblem for OneMax {
        fn name(&self) -> &'static str {
            "one-max"
        }

        fn create_gene<R: Rng>(&self, rng: &mut R) -> Gene {
            (0..self.n).map(|_| rng.random_range(0..2)).collect()
        }

        fn evaluate(&self, gene: &[u32]) -> Fitness {
            gene.iter().filter(|&&b| b == 0).count() as Fitness
        }

        fn crossover<R: Rng>(&self, p1: &[u32], p2: &[u32], rng: &mut R) -> Vec<Gene> {
            let point = rng.random_range(0..=self.n);
            let (c1, c2) = one_point_crossover(p1, p2, point);
            vec![c1, c2]
        }

        fn mutate<R: Rng>(&self, gene: &mut Gene, rng: &mut R) {
            let idx = rng.random_range(0..self.n);
            gene[idx] ^= 1;
        }

        fn decode(&self, gene: &[u32]) -> Board {
            let mut board = Board::zeros(self.n);
            for (i, &b) in gene.iter().enumerate() {
                board.set(0, i, b);
            }
            board
        }

        fn is_solved(&self, fitness: Fitness) -> bool {
            fitness == 0
        }

        fn pairing(&self) -> Pairing {
            self.pairing
        }
    }

    fn one_max(pairing: Pairing) -> OneMax {
        OneMax { n: 12, pairing }
    }

    #[test]
    fn test_ranked_convergence() {
        let problem = one_max(Pairing::Ranked);
        let config = GaConfig::default()
            .with_population_size(60)
            .with_selection_size(20)
            .with_seed(42)
            .with_max_generations(2_000)
            .with_parallel(false);

        let result = GaRunner::run(&problem, &config).unwrap();

        assert_eq!(result.termination, Termination::Solved);
        assert!(result.is_solved());
        assert_eq!(result.best.fitness(), 0);
        assert!(result.best.gene().iter().all(|&b| b == 1));
    }

    #[test]
    fn test_shuffled_convergence() {
        let problem = one_max(Pairing::Shuffled);
        let config = GaConfig::default()
            .with_population_size(60)
            .with_selection_size(20)
            .with_seed(42)
            .with_max_generations(2_000)
            .with_parallel(false);

        let result = GaRunner::run(&problem, &config).unwrap();
        assert!(result.is_solved());
    }

    #[test]
    fn test_max_generations_cap() {
        let problem = OneMax {
            n: 400,
            pairing: Pairing::Ranked,
        };
        let config = GaConfig::default()
            .with_population_size(10)
            .with_selection_size(4)
            .with_seed(1)
            .with_max_generations(3)
            .with_parallel(false);

        let result = GaRunner::run(&problem, &config).unwrap();

        assert_eq!(result.termination, Termination::MaxGenerations);
        assert!(!result.is_solved());
        assert_eq!(result.generations, 3);
        // initial + one entry per round
        assert_eq!(result.fitness_history.len(), 4);
    }

    #[test]
    fn test_time_limit() {
        let problem = OneMax {
            n: 10_000,
            pairing: Pairing::Shuffled,
        };
        let config = GaConfig::default()
            .with_population_size(20)
            .with_selection_size(10)
            .with_seed(1)
            .with_time_limit_ms(20);

        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.termination, Termination::TimeLimit);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = one_max(Pairing::Ranked);
        let config = GaConfig::default().with_selection_size(3);
        assert_eq!(
            GaRunner::run(&problem, &config).unwrap_err(),
            ConfigError::SelectionOdd(3)
        );
    }

    #[test]
    fn test_observer_sees_every_generation_sorted() {
        let problem = OneMax {
            n: 64,
            pairing: Pairing::Shuffled,
        };
        let config = GaConfig::default()
            .with_population_size(30)
            .with_selection_size(10)
            .with_seed(9)
            .with_max_generations(15);

        let mut seen = Vec::new();
        let result = GaRunner::run_with_observer(&problem, &config, &mut |p: &Progress<'_>| {
            assert!(selection::is_ranked(p.population));
            assert_eq!(p.best_fitness, p.population[0].fitness());
            assert_eq!(p.board, &problem.decode(p.population[0].gene()));
            seen.push((p.generation, p.population.len()));
        })
        .unwrap();

        assert_eq!(seen.len(), result.generations);
        assert_eq!(seen[0], (0, 30));
        // Shuffled pairing replaces with 2 children per pair, then truncates
        for &(generation, len) in &seen[1..] {
            assert!(generation > 0);
            assert_eq!(len, 10);
        }
    }

    #[test]
    fn test_ranked_pairing_truncates_before_first_round() {
        let problem = OneMax {
            n: 64,
            pairing: Pairing::Ranked,
        };
        let config = GaConfig::default()
            .with_population_size(50)
            .with_selection_size(8)
            .with_seed(5)
            .with_max_generations(3);

        let mut sizes = Vec::new();
        GaRunner::run_with_observer(&problem, &config, &mut |p: &Progress<'_>| {
            sizes.push(p.population.len());
        })
        .unwrap();
        assert_eq!(sizes, vec![8, 8, 8]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let problem = OneMax {
            n: 48,
            pairing: Pairing::Shuffled,
        };
        let base = GaConfig::default()
            .with_population_size(40)
            .with_selection_size(10)
            .with_seed(1234)
            .with_max_generations(25);

        let seq = GaRunner::run(&problem, &base.clone().with_parallel(false)).unwrap();
        let par = GaRunner::run(&problem, &base.with_parallel(true)).unwrap();

        assert_eq!(seq.best, par.best);
        assert_eq!(seq.generations, par.generations);
        assert_eq!(seq.fitness_history, par.fitness_history);
    }

    #[test]
    fn test_seed_reproducibility() {
        let problem = one_max(Pairing::Ranked);
        let config = GaConfig::default()
            .with_population_size(20)
            .with_selection_size(6)
            .with_seed(77)
            .with_max_generations(10);

        let a = GaRunner::run(&problem, &config).unwrap();
        let b = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_odd_population_leaves_last_unpaired() {
        let problem = one_max(Pairing::Shuffled);
        let mut rng = create_rng(3);
        let parents: Vec<Candidate> = (0..5)
            .map(|_| Candidate::evaluated(&problem, problem.create_gene(&mut rng)))
            .collect();

        let children = breed(&problem, &parents, &mut rng, false);
        assert_eq!(children.len(), 4);
        for child in &children {
            assert_eq!(child.fitness(), problem.evaluate(child.gene()));
        }
    }
}
