//! Seedable RNG construction.
//!
//! Every operator and driver in this crate draws randomness from an
//! explicitly passed generator, so a fixed seed reproduces a run exactly.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
