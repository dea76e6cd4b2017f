//! Iterative color reduction.
//!
//! [`ReductionRunner`] runs the GA once with a generous palette, then keeps
//! re-running it with one color fewer, seeding each run with the previous
//! best coloring folded onto the smaller palette. The first failed phase
//! ends the descent.

use super::config::ReductionConfig;
use crate::error::Result;
use crate::ga::{Cost, GaRunner, Genome};
use crate::problems::coloring::{remap_colors, used_colors};
use crate::problems::{ColoringCost, Graph};
use rand::Rng;
use tracing::{debug, info};

/// Outcome of one engine call inside a reduction run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseOutcome {
    /// Palette size of this phase.
    pub palette: usize,

    /// Whether a conflict-free coloring was found.
    pub success: bool,

    /// Generations the engine used.
    pub generations: usize,

    /// Best combined cost reached.
    pub best_cost: Option<Cost>,
}

/// Result of one color-reduction run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReductionResult {
    /// Whether phase 1 found a conflict-free coloring.
    ///
    /// When `false` no reduction was attempted and the run is discarded.
    pub success: bool,

    /// Smallest palette with a conflict-free coloring.
    ///
    /// Starts at the number of colors the phase-1 solution uses and drops
    /// to `t` for every successful reduction phase.
    pub min_palette: Option<usize>,

    /// Generations of phase 1 plus every successful reduction phase.
    pub total_generations: usize,

    /// Conflict-free coloring within `min_palette` colors.
    pub coloring: Option<Genome>,

    /// Every engine call in order, including the final failed one.
    pub phases: Vec<PhaseOutcome>,
}

/// Executes the color-reduction protocol.
///
/// # Usage
///
/// ```
/// use u_palette::problems::Graph;
/// use u_palette::random::create_rng;
/// use u_palette::reduction::{ReductionConfig, ReductionRunner};
///
/// let graph = Graph::demo();
/// let mut rng = create_rng(7);
/// let result = ReductionRunner::run(&graph, &ReductionConfig::default(), &mut rng).unwrap();
/// if let Some(palette) = result.min_palette {
///     assert!(palette >= 3);
/// }
/// ```
pub struct ReductionRunner;

impl ReductionRunner {
    /// Runs phase 1 and the reduction phases on `graph`.
    ///
    /// All phases draw from the same `rng`.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or a palette is too
    /// large for [`ColoringCost`].
    pub fn run<R: Rng>(
        graph: &Graph,
        config: &ReductionConfig,
        rng: &mut R,
    ) -> Result<ReductionResult> {
        config.validate()?;
        let vertices = graph.vertex_count();

        // Phase 1: unseeded, full palette.
        let cost = ColoringCost::new(graph, config.initial_palette)?;
        let ga = config.phase_config(vertices, config.initial_palette, config.initial_generations);
        let first = GaRunner::run(&ga, rng, &cost, ColoringCost::is_goal, None)?;

        let mut phases = vec![PhaseOutcome {
            palette: config.initial_palette,
            success: first.success,
            generations: first.generations,
            best_cost: first.best_cost(),
        }];
        let (conflicts, colors) = split_cost(first.best_cost());
        debug!(
            palette = config.initial_palette,
            success = first.success,
            generations = first.generations,
            ?conflicts,
            ?colors,
            "initial coloring phase finished"
        );

        let mut current = match first.best {
            Some(elite) if first.success => elite.genome,
            _ => {
                info!(
                    generations = first.generations,
                    "no conflict-free coloring in initial phase, skipping reduction"
                );
                return Ok(ReductionResult {
                    success: false,
                    min_palette: None,
                    total_generations: first.generations,
                    coloring: None,
                    phases,
                });
            }
        };
        let mut min_palette = used_colors(&current);
        let mut total_generations = first.generations;

        // Reduction phases: descend one color at a time, stop on first failure.
        let start = config.reduction_start.min(min_palette.saturating_sub(1));
        for palette in (config.min_palette..=start).rev() {
            let seed = remap_colors(&current, palette);
            let cost = ColoringCost::new(graph, palette)?;
            let ga = config.phase_config(vertices, palette, config.reduction_generations);
            let result =
                GaRunner::run(&ga, rng, &cost, ColoringCost::is_goal, Some(seed.as_slice()))?;

            phases.push(PhaseOutcome {
                palette,
                success: result.success,
                generations: result.generations,
                best_cost: result.best_cost(),
            });
            let (conflicts, colors) = split_cost(result.best_cost());
            debug!(
                palette,
                success = result.success,
                generations = result.generations,
                ?conflicts,
                ?colors,
                "reduction phase finished"
            );

            match result.best {
                Some(elite) if result.success => {
                    current = elite.genome;
                    min_palette = palette;
                    total_generations += result.generations;
                }
                _ => break,
            }
        }

        info!(min_palette, total_generations, "color reduction finished");
        Ok(ReductionResult {
            success: true,
            min_palette: Some(min_palette),
            total_generations,
            coloring: Some(current),
            phases,
        })
    }
}

/// Conflict and color terms of a phase's best cost, for logging.
fn split_cost(cost: Option<Cost>) -> (Option<Cost>, Option<Cost>) {
    cost.map(ColoringCost::decompose).unzip()
}
