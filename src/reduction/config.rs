//! Color-reduction configuration.

use crate::error::{GaError, Result};
use crate::ga::GaConfig;

/// Configuration for the color-reduction driver.
///
/// Phase 1 colors the graph with `initial_palette` colors from a random
/// population. Each reduction phase then tries one color fewer, starting at
/// `min(reduction_start, colors_used - 1)` and never going below
/// `min_palette`.
///
/// # Examples
///
/// ```
/// use u_palette::reduction::ReductionConfig;
///
/// let config = ReductionConfig::default()
///     .with_population_size(80)
///     .with_reduction_generations(200);
/// assert_eq!(config.initial_palette, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReductionConfig {
    /// Palette size of the unseeded first phase.
    pub initial_palette: usize,

    /// Largest palette a reduction phase starts from.
    pub reduction_start: usize,

    /// Smallest palette ever attempted.
    pub min_palette: usize,

    /// Population size of every phase.
    pub population_size: usize,

    /// Tournament size of every phase.
    pub tournament_size: usize,

    /// Crossover probability of every phase.
    pub crossover_rate: f64,

    /// Per-gene mutation probability of every phase.
    pub mutation_rate: f64,

    /// Generation budget of phase 1.
    pub initial_generations: usize,

    /// Generation budget of each reduction phase.
    pub reduction_generations: usize,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            initial_palette: 5,
            reduction_start: 4,
            min_palette: 2,
            population_size: 120,
            tournament_size: 3,
            crossover_rate: 0.7,
            mutation_rate: 0.02,
            initial_generations: 600,
            reduction_generations: 400,
        }
    }
}

impl ReductionConfig {
    /// Sets the phase-1 palette size.
    pub fn with_initial_palette(mut self, palette: usize) -> Self {
        self.initial_palette = palette;
        self
    }

    /// Sets the largest palette tried by the first reduction phase.
    pub fn with_reduction_start(mut self, palette: usize) -> Self {
        self.reduction_start = palette;
        self
    }

    /// Sets the smallest palette attempted.
    pub fn with_min_palette(mut self, palette: usize) -> Self {
        self.min_palette = palette;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
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

    /// Sets the phase-1 generation budget.
    pub fn with_initial_generations(mut self, n: usize) -> Self {
        self.initial_generations = n;
        self
    }

    /// Sets the generation budget of each reduction phase.
    pub fn with_reduction_generations(mut self, n: usize) -> Self {
        self.reduction_generations = n;
        self
    }

    /// Engine configuration for one phase on a graph with `vertices` vertices.
    pub fn phase_config(
        &self,
        vertices: usize,
        palette: usize,
        max_generations: usize,
    ) -> GaConfig {
        GaConfig::new(vertices, palette)
            .with_population_size(self.population_size)
            .with_tournament_size(self.tournament_size)
            .with_crossover_rate(self.crossover_rate)
            .with_mutation_rate(self.mutation_rate)
            .with_max_generations(max_generations)
    }

    /// Validates the configuration.
    ///
    /// Engine parameters are checked with [`GaConfig::validate`] using the
    /// phase-1 palette.
    pub fn validate(&self) -> Result<()> {
        if self.min_palette == 0 {
            return Err(GaError::InvalidConfig("min_palette must be at least 1".into()));
        }
        if self.initial_palette < self.min_palette {
            return Err(GaError::InvalidConfig(format!(
                "initial_palette {} is below min_palette {}",
                self.initial_palette, self.min_palette
            )));
        }
        self.phase_config(1, self.initial_palette, self.initial_generations)
            .validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReductionConfig::default();
        assert_eq!(config.initial_palette, 5);
        assert_eq!(config.reduction_start, 4);
        assert_eq!(config.min_palette, 2);
        assert_eq!(config.population_size, 120);
        assert_eq!(config.tournament_size, 3);
        assert_eq!(config.initial_generations, 600);
        assert_eq!(config.reduction_generations, 400);
        assert!((config.crossover_rate - 0.7).abs() < 1e-10);
        assert!((config.mutation_rate - 0.02).abs() < 1e-10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_phase_config() {
        let ga = ReductionConfig::default().phase_config(12, 3, 400);
        assert_eq!(ga.genome_length, 12);
        assert_eq!(ga.alphabet_size, 3);
        assert_eq!(ga.population_size, 120);
        assert_eq!(ga.max_generations, 400);
        assert!((ga.mutation_rate - 0.02).abs() < 1e-10);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(ReductionConfig::default().with_min_palette(0).validate().is_err());
        assert!(ReductionConfig::default()
            .with_initial_palette(1)
            .validate()
            .is_err());
        assert!(ReductionConfig::default()
            .with_population_size(0)
            .validate()
            .is_err());
        assert!(ReductionConfig::default()
            .with_mutation_rate(1.5)
            .validate()
            .is_err());
    }
}
