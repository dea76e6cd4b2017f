//! Genetic Algorithm engine for integer genomes.
//!
//! A generic, problem-agnostic GA. Problems plug in through a
//! [`CostFunction`] and a goal predicate `Fn(Cost) -> bool`; the engine
//! never knows which problem it serves.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters (genome shape, population, rates, budget)
//! - [`GaRunner`]: Executes the generational loop
//! - [`RunResult`]: Outcome of one run
//! - [`Elite`]: Best-ever genome of a run, used for elitism and the goal test
//!
//! # Submodules
//!
//! - [`operators`]: One-point crossover and random-reset mutation
//! - [`selection`]: Tournament selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaRunner, RunResult};
pub use types::{Cost, CostFunction, Elite, Genome};
