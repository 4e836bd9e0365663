//! Random number generation.
//!
//! Each engine owns its generator. A fixed seed gives a reproducible
//! stream; without one the seed is drawn from the thread RNG.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator type used by the engines.
pub type SearchRng = ChaCha8Rng;

/// Creates a generator from `seed`, or from fresh entropy when `None`.
pub fn create_rng(seed: Option<u64>) -> SearchRng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::seed_from_u64(rand::random()),
    }
}

/// Shuffles `items` in place.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
