//! Color-reduction driver for graph coloring.
//!
//! Finds a small palette for a fixed graph by iterative deepening over the
//! palette size:
//!
//! 1. Color the graph with `initial_palette` colors from scratch. If that
//!    fails the run is abandoned.
//! 2. For `t` from `min(reduction_start, colors_used - 1)` down to
//!    `min_palette`, fold the current best coloring onto `t` colors
//!    (`color mod t`) and use it to seed a new run with palette `t`.
//! 3. Stop at the first palette that fails.
//!
//! The descent is greedy: a failed palette is never retried and smaller
//! palettes are not attempted after it.

mod config;
mod runner;

pub use config::ReductionConfig;
pub use runner::{PhaseOutcome, ReductionResult, ReductionRunner};
