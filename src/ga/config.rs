//! GA configuration.
//!
//! [`GaConfig`] holds all parameters of one engine invocation.

use crate::error::{GaError, Result};

/// Configuration for one GA run.
///
/// Builders store values as given; out-of-range values are rejected by
/// [`validate`](Self::validate), which [`GaRunner`](super::GaRunner) calls
/// before doing any work.
///
/// # Defaults
///
/// ```
/// use u_palette::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_palette::ga::GaConfig;
///
/// let config = GaConfig::new(12, 5)
///     .with_population_size(120)
///     .with_mutation_rate(0.02)
///     .with_max_generations(600);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of genes per genome.
    pub genome_length: usize,

    /// Number of allele values; genes are drawn from `[0, alphabet_size)`.
    pub alphabet_size: usize,

    /// Number of genomes per generation.
    pub population_size: usize,

    /// Probability of recombining two parents (0.0–1.0).
    ///
    /// When crossover is not applied the child is a copy of the first parent.
    pub crossover_rate: f64,

    /// Per-gene mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of draws per tournament. `1` means uniform random selection.
    pub tournament_size: usize,

    /// Hard ceiling on generations. `0` evaluates nothing.
    pub max_generations: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            genome_length: 8,
            alphabet_size: 8,
            population_size: 50,
            crossover_rate: 0.7,
            mutation_rate: 0.01,
            tournament_size: 3,
            max_generations: 300,
        }
    }
}

impl GaConfig {
    /// Creates a configuration for the given genome shape with default rates.
    pub fn new(genome_length: usize, alphabet_size: usize) -> Self {
        Self {
            genome_length,
            alphabet_size,
            ..Self::default()
        }
    }

    /// Preset for N-queens: one gene per column, alphabet `n` rows.
    ///
    /// - Population: 50, Tournament: 3, Generations: 300
    /// - Crossover: 0.7, Mutation: 0.01
    pub fn queens(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Sets the genome length.
    pub fn with_genome_length(mut self, n: usize) -> Self {
        self.genome_length = n;
        self
    }

    /// Sets the alphabet size.
    pub fn with_alphabet_size(mut self, n: usize) -> Self {
        self.alphabet_size = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.genome_length == 0 {
            return Err(GaError::InvalidConfig(
                "genome_length must be at least 1".into(),
            ));
        }
        if self.alphabet_size == 0 {
            return Err(GaError::InvalidConfig(
                "alphabet_size must be at least 1".into(),
            ));
        }
        if self.population_size == 0 {
            return Err(GaError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(GaError::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        check_probability("crossover_rate", self.crossover_rate)?;
        check_probability("mutation_rate", self.mutation_rate)?;
        Ok(())
    }

    /// Checks that `seed` has the configured length and only valid alleles.
    pub fn validate_seed(&self, seed: &[usize]) -> Result<()> {
        if seed.len() != self.genome_length {
            return Err(GaError::InvalidSeed {
                reason: format!(
                    "length {} does not match genome_length {}",
                    seed.len(),
                    self.genome_length
                ),
            });
        }
        if let Some((pos, &allele)) = seed
            .iter()
            .enumerate()
            .find(|&(_, &a)| a >= self.alphabet_size)
        {
            return Err(GaError::InvalidSeed {
                reason: format!(
                    "gene {pos} has value {allele}, alphabet_size is {}",
                    self.alphabet_size
                ),
            });
        }
        Ok(())
    }
}

fn check_probability(name: &str, p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(GaError::InvalidConfig(format!(
            "{name} must be within [0, 1], got {p}"
        )))
    }
}
