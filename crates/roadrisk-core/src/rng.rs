//! Deterministic simulation RNG.
//!
//! The accident simulator draws edges and acceptance rolls from a
//! pseudo-random source.  That source is an explicit, seedable value passed
//! by the caller — never implicit global state — so a run is reproducible
//! from its seed alone.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable RNG for the Monte-Carlo accident simulation.
///
/// Wraps a `SmallRng`: fast, non-cryptographic, and deterministic for a
/// given seed, which is exactly the trade-off a repeatable simulation wants.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
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
}
