//! Repeated-trial experiments.
//!
//! An [`Experiment`] runs the same trial `runs` times. Trial `i` gets its
//! own generator, drawn as the `i`-th value of a master generator seeded
//! with [`Experiment::seed`], so the whole batch replays from one seed and
//! trials never share random state.
//!
//! With the `parallel` feature trials run on the rayon pool. The per-trial
//! generators are drawn up front in trial order, so results are identical
//! to a sequential run.

mod report;

pub use report::{ColoringReport, QueensReport, TrialStats};

use crate::error::Result;
use crate::ga::{GaConfig, GaRunner};
use crate::problems::{Graph, QueensConflicts};
use crate::random::{create_rng, spawn_rng};
use crate::reduction::{ReductionConfig, ReductionResult, ReductionRunner};
use rand::rngs::StdRng;
use tracing::info;

/// A batch of independent trials reproducible from one master seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Experiment {
    /// Number of trials.
    pub runs: usize,
    /// Master seed.
    pub seed: u64,
}

impl Experiment {
    /// Creates an experiment of `runs` trials from a master seed.
    pub fn new(runs: usize, seed: u64) -> Self {
        Self { runs, seed }
    }

    /// Runs the N-queens GA `runs` times.
    ///
    /// `config.genome_length` is the board size.
    pub fn queens(&self, config: &GaConfig) -> Result<QueensReport> {
        config.validate()?;
        let results = self.run_trials(|rng| {
            GaRunner::run(config, rng, &QueensConflicts, QueensConflicts::is_goal, None)
        })?;

        let mut stats = TrialStats::default();
        for result in &results {
            if result.success {
                stats.record_success(result.generations);
            } else {
                stats.record_failure();
            }
        }
        let report = QueensReport {
            n: config.genome_length,
            stats,
        };
        info!(
            n = report.n,
            runs = report.stats.runs,
            successes = report.stats.successes,
            "queens experiment finished"
        );
        Ok(report)
    }

    /// Runs the color-reduction driver `runs` times on `graph`.
    pub fn coloring(&self, graph: &Graph, config: &ReductionConfig) -> Result<ColoringReport> {
        config.validate()?;
        let results = self.run_trials(|rng| ReductionRunner::run(graph, config, rng))?;

        let mut report = ColoringReport::default();
        for result in &results {
            record_reduction(&mut report, result);
        }
        info!(
            runs = report.stats.runs,
            successes = report.stats.successes,
            best_palette = ?report.best_palette(),
            "coloring experiment finished"
        );
        Ok(report)
    }

    /// One generator per trial, in trial order.
    fn trial_rngs(&self) -> Vec<StdRng> {
        let mut master = create_rng(self.seed);
        (0..self.runs).map(|_| spawn_rng(&mut master)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn run_trials<T, F>(&self, trial: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&mut StdRng) -> Result<T> + Sync,
    {
        self.trial_rngs()
            .into_iter()
            .map(|mut rng| trial(&mut rng))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run_trials<T, F>(&self, trial: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&mut StdRng) -> Result<T> + Sync,
    {
        use rayon::prelude::*;

        self.trial_rngs()
            .into_par_iter()
            .map(|mut rng| trial(&mut rng))
            .collect()
    }
}

fn record_reduction(report: &mut ColoringReport, result: &ReductionResult) {
    match result.min_palette {
        Some(palette) if result.success => {
            report.stats.record_success(result.total_generations);
            *report.palette_histogram.entry(palette).or_insert(0) += 1;
        }
        _ => report.stats.record_failure(),
    }
}
