//! Random number generator construction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded, reproducible RNG.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates the master RNG for a run: seeded when `seed` is given, otherwise
/// seeded from OS entropy.
pub fn master_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Draws `count` independent stream seeds from `rng`.
///
/// Drawing all seeds up front keeps per-stream randomness independent of
/// execution order, so sequential and parallel runs agree.
pub fn split_seeds<R: Rng>(rng: &mut R, count: usize) -> Vec<u64> {
    (0..count).map(|_| rng.random()).collect()
}
