//! Random number generation helpers.
//!
//! Every run draws from one seeded [`StdRng`], so a fixed seed reproduces
//! the whole search.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the generator used by the engine.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, drawing a fresh seed when
/// none is given.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
