//! Seeded random draws shared by every layout strategy
//!
//! All randomness flows through one explicitly passed generator so that a
//! level is a pure function of the seed.

use rand::seq::SliceRandom;
use rand::{Rng as _, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator type used for all level generation
pub type Rng = ChaCha8Rng;

/// Create a generator from a seed value
pub fn rng_from_seed(seed: u64) -> Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Uniform integer in the half-open range `[min, max)`.
///
/// An empty range yields `min` without consuming randomness.
pub fn rand_range(min: i32, max: i32, rng: &mut Rng) -> i32 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..max)
}

/// Uniform float in `[0, 1)`
pub fn frand(rng: &mut Rng) -> f32 {
    rng.r#gen::<f32>()
}

/// Shuffle a slice in place
pub fn shuffle<T>(items: &mut [T], rng: &mut Rng) {
    items.shuffle(rng);
}
