//! Variation operators for integer genomes.
//!
//! # Crossover
//!
//! - [`one_point_crossover`]: splice two parents at a single cut index
//!
//! # Mutation
//!
//! - [`mutate`]: per-gene random reset to a different allele
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::types::Genome;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// One-point crossover producing a single child.
///
/// Draws `u` in `[0, 1)`. If `u >= crossover_rate` the child is a copy of
/// `parent1`. Otherwise a cut is drawn uniformly from `[1, len - 1]` and the
/// child takes `parent1[..cut]` followed by `parent2[cut..]`.
///
/// Genomes shorter than 2 have no valid cut, so the child is a copy of
/// `parent1` (the probability draw is still consumed).
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn one_point_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    crossover_rate: f64,
    rng: &mut R,
) -> Genome {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if rng.random_range(0.0..1.0) >= crossover_rate || n < 2 {
        return parent1.to_vec();
    }

    let cut = rng.random_range(1..n);
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&parent1[..cut]);
    child.extend_from_slice(&parent2[cut..]);
    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Random-reset mutation, in place.
///
/// Each gene independently draws `u` in `[0, 1)`; when `u < mutation_rate`
/// the gene is replaced by a uniformly chosen allele *other than* its current
/// value. With `alphabet_size <= 1` there is no other allele and the gene is
/// left unchanged (the probability draw is still consumed).
///
/// # Complexity
/// O(n)
pub fn mutate<R: Rng>(genome: &mut [usize], mutation_rate: f64, alphabet_size: usize, rng: &mut R) {
    for gene in genome.iter_mut() {
        if rng.random_range(0.0..1.0) < mutation_rate && alphabet_size > 1 {
            *gene = different_allele(*gene, alphabet_size, rng);
        }
    }
}

/// Uniform draw from `[0, alphabet_size) \ {current}`.
///
/// Samples from an alphabet one smaller and shifts values at or above
/// `current` up by one.
fn different_allele<R: Rng>(current: usize, alphabet_size: usize, rng: &mut R) -> usize {
    let v = rng.random_range(0..alphabet_size - 1);
    if v >= current {
        v + 1
    } else {
        v
    }
}

/// Creates a genome with alleles drawn uniformly from `[0, alphabet_size)`.
pub fn random_genome<R: Rng>(length: usize, alphabet_size: usize, rng: &mut R) -> Genome {
    (0..length)
        .map(|_| rng.random_range(0..alphabet_size))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
