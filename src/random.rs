//! Random stream construction.
//!
//! Every engine call owns its own generator. Repeated trials draw a fresh
//! seed per trial from one master generator, so a whole experiment is
//! reproducible from a single seed while the trials stay decorrelated.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a new independent generator from `master`.
///
/// Consumes exactly one `u64` from the master stream.
pub fn spawn_rng<R: Rng>(master: &mut R) -> StdRng {
    create_rng(master.random())
}
