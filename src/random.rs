//! Seeded random number generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a reproducible generator from a seed.
///
/// All randomness in the crate flows through generators passed by
/// reference, never through a process-global source.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
