//! Integer-genome genetic algorithm with an iterative color-reduction driver.
//!
//! - **GA engine** ([`ga`]): tournament selection, one-point crossover,
//!   random-reset mutation and single-genome elitism over fixed-length
//!   integer genomes. Problems plug in as a cost function plus a goal test.
//! - **Problem adapters** ([`problems`]): N-queens conflicts and graph
//!   coloring cost over a fixed palette.
//! - **Color reduction** ([`reduction`]): re-runs the engine with a
//!   shrinking palette, seeding each run from the previous best coloring.
//! - **Experiments** ([`experiment`]): repeated trials from one master seed
//!   with success-rate and generation statistics.
//!
//! # Architecture
//!
//! Data flows one way: driver → engine → operators → genome. The engine is
//! single-threaded and owns no state between calls; every call receives its
//! own random generator, so runs are reproducible and may be executed
//! concurrently as long as each has its own generator.

pub mod error;
pub mod experiment;
pub mod ga;
pub mod problems;
pub mod random;
pub mod reduction;

pub use error::{GaError, Result};
