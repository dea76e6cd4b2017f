//! Problem adapters for the GA engine.
//!
//! - [`QueensConflicts`]: N-queens attacking-pair count
//! - [`ColoringCost`]: graph-coloring cost over a fixed palette
//! - [`Graph`]: immutable undirected graph for the coloring adapter

pub mod coloring;
mod graph;
mod queens;

pub use coloring::ColoringCost;
pub use graph::Graph;
pub use queens::QueensConflicts;
