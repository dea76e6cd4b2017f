//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Cost, Genome};
use rand::Rng;

/// Tournament selection: draw `k` indices with replacement, return a copy of the cheapest.
///
/// The first draw is the incumbent; a later draw replaces it only on
/// strictly lower cost. `k = 1` is uniform random selection.
///
/// `costs[i]` is the cost of `population[i]`.
///
/// # Complexity
/// O(k) draws plus one genome copy
///
/// # Panics
/// Panics if `population` is empty or `costs` is shorter than `population`.
pub fn tournament<R: Rng>(population: &[Genome], costs: &[Cost], k: usize, rng: &mut R) -> Genome {
    population[tournament_index(costs, population.len(), k, rng)].clone()
}

/// Index of the tournament winner among `n` candidates.
fn tournament_index<R: Rng>(costs: &[Cost], n: usize, k: usize, rng: &mut R) -> usize {
    assert!(n > 0, "cannot select from empty population");

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if costs[idx] < costs[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}
