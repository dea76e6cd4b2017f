//! GA generational loop.
//!
//! [`GaRunner`] orchestrates one complete run:
//! initialization → evaluation → elitism/goal test → tournament mating pool
//! → crossover → mutation → repeat.

use super::config::GaConfig;
use super::operators::{mutate, one_point_crossover, random_genome};
use super::selection::tournament;
use super::types::{Cost, CostFunction, Elite, Genome};
use crate::error::Result;
use rand::Rng;
use tracing::{debug, trace};

/// Result of one GA run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Whether the goal predicate accepted the best cost.
    pub success: bool,

    /// Generation at which the goal was reached, or `max_generations`.
    pub generations: usize,

    /// Best genome found during the entire run.
    ///
    /// `None` only when `max_generations == 0`.
    pub best: Option<Elite>,

    /// Global best cost after each evaluated generation.
    pub cost_history: Vec<Cost>,
}

impl RunResult {
    /// The best genome, if any generation was evaluated.
    pub fn best_genome(&self) -> Option<&[usize]> {
        self.best.as_ref().map(|e| e.genome.as_slice())
    }

    /// The best cost, if any generation was evaluated.
    pub fn best_cost(&self) -> Option<Cost> {
        self.best.as_ref().map(|e| e.cost)
    }
}

/// Executes the GA loop.
///
/// # Usage
///
/// ```
/// use u_palette::ga::{GaConfig, GaRunner};
/// use u_palette::random::create_rng;
///
/// // Minimize the number of non-zero genes.
/// let config = GaConfig::new(10, 4).with_max_generations(200);
/// let cost = |g: &[usize]| g.iter().filter(|&&a| a != 0).count() as u64;
/// let mut rng = create_rng(42);
///
/// let result = GaRunner::run(&config, &mut rng, &cost, |c| c == 0, None).unwrap();
/// assert!(result.generations <= 200);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA.
    ///
    /// `seed`, when given, is copied into the first slot of the initial
    /// population; the remaining slots are random genomes.
    ///
    /// # Errors
    /// Returns an error if the configuration or the seed is invalid.
    /// Failing to reach the goal is not an error; see [`RunResult::success`].
    pub fn run<R, C, G>(
        config: &GaConfig,
        rng: &mut R,
        cost_fn: &C,
        is_goal: G,
        seed: Option<&[usize]>,
    ) -> Result<RunResult>
    where
        R: Rng,
        C: CostFunction + ?Sized,
        G: Fn(Cost) -> bool,
    {
        config.validate()?;
        if let Some(seed) = seed {
            config.validate_seed(seed)?;
        }

        let pop_size = config.population_size;

        // 1. Initialize population
        let mut population: Vec<Genome> = Vec::with_capacity(pop_size);
        if let Some(seed) = seed {
            population.push(seed.to_vec());
        }
        while population.len() < pop_size {
            population.push(random_genome(
                config.genome_length,
                config.alphabet_size,
                rng,
            ));
        }

        let mut best: Option<Elite> = None;
        let mut cost_history = Vec::with_capacity(config.max_generations);

        // 2. Generational loop
        for gen in 1..=config.max_generations {
            let costs: Vec<Cost> = population.iter().map(|g| cost_fn.cost(g)).collect();

            if Elite::absorb(&mut best, &population, &costs) {
                trace!(gen, cost = ?best.as_ref().map(|e| e.cost), "new global best");
            }

            // Goal is tested against the run-global best, not this generation's.
            if let Some(best_cost) = best.as_ref().map(|e| e.cost) {
                cost_history.push(best_cost);
                if is_goal(best_cost) {
                    debug!(gen, cost = best_cost, "goal reached");
                    return Ok(RunResult {
                        success: true,
                        generations: gen,
                        best,
                        cost_history,
                    });
                }
            }

            let mating_pool: Vec<Genome> = (0..pop_size)
                .map(|_| tournament(&population, &costs, config.tournament_size, rng))
                .collect();

            population = breed(config, &mating_pool, best.as_ref(), rng);
        }

        debug!(
            generations = config.max_generations,
            cost = ?best.as_ref().map(|e| e.cost),
            "generation budget exhausted"
        );
        Ok(RunResult {
            success: false,
            generations: config.max_generations,
            best,
            cost_history,
        })
    }
}

/// Builds the next population: the elite first, then mutated crossover children.
fn breed<R: Rng>(
    config: &GaConfig,
    mating_pool: &[Genome],
    elite: Option<&Elite>,
    rng: &mut R,
) -> Vec<Genome> {
    let mut next: Vec<Genome> = Vec::with_capacity(config.population_size);
    if let Some(elite) = elite {
        next.push(elite.genome.clone());
    }
    while next.len() < config.population_size {
        let p1 = &mating_pool[rng.random_range(0..mating_pool.len())];
        let p2 = &mating_pool[rng.random_range(0..mating_pool.len())];
        let mut child = one_point_crossover(p1, p2, config.crossover_rate, rng);
        mutate(&mut child, config.mutation_rate, config.alphabet_size, rng);
        next.push(child);
    }
    next
}

// ============================================================================
// Tests
// ============================================================================
