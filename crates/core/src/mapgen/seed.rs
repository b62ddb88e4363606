//! Seed mixing and the random stream used while building one floor.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Seed for the `generation`-th floor built in a run. Counting generations
/// rather than floor indices keeps a restarted run from replaying the same
/// layouts.
pub(super) fn derive_floor_seed(run_seed: u64, generation: u64) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= generation.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

pub(super) struct FloorRng {
    rng: ChaCha8Rng,
}

impl FloorRng {
    pub(super) fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform integer in `min..=max`.
    pub(super) fn range(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        min + (self.rng.next_u64() % span) as i32
    }

    /// Uniform float in `[0, 1)`.
    pub(super) fn unit(&mut self) -> f64 {
        (self.rng.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
    }

    pub(super) fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    pub(super) fn coin(&mut self) -> bool {
        self.rng.next_u64() & 1 == 0
    }
}
