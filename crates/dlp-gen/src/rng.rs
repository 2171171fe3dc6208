//! Deterministic RNG wrapper for the fake-data builders.
//!
//! # Determinism strategy
//!
//! One root seed drives a whole run.  Each tier derives its own child RNG:
//!
//!   seed = root_seed XOR (stream * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive stream numbers uniformly across the seed space.
//! Changing the row count of one tier therefore never disturbs the records
//! of another.  Not suitable for anything security-related.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG used by every fake builder.
pub struct FakeRng(SmallRng);

impl FakeRng {
    pub fn new(seed: u64) -> Self {
        FakeRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent stream from a root seed, e.g. one per tier.
    pub fn stream(root_seed: u64, stream: u64) -> Self {
        FakeRng::new(root_seed ^ stream.wrapping_mul(MIXING_CONSTANT))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A uniformly chosen decimal digit.
    #[inline]
    pub fn digit(&mut self) -> u8 {
        self.0.gen_range(0..10)
    }

    /// Choose an element from a non-empty slice.
    ///
    /// # Panics
    /// Panics if `slice` is empty; every caller passes a `const` word list.
    #[inline]
    pub fn pick<'a, T>(&mut self, slice: &'a [T]) -> &'a T {
        &slice[self.0.gen_range(0..slice.len())]
    }

    /// Choose `amount` distinct elements from `slice` (fewer if it is shorter).
    pub fn pick_many<'a, T>(&mut self, slice: &'a [T], amount: usize) -> Vec<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose_multiple(&mut self.0, amount).collect()
    }
}
