//! Deterministic random number service.
//!
//! All game randomness (map growth, dice, shuffles, reinforcement placement,
//! bot tie-breaks) flows through a single `GameRng`, so a seed fully
//! determines a game's micro-outcomes. The RNG is threaded explicitly into
//! every function that needs it; nothing in the crate reaches a
//! process-global source.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

/// Seeded wrapper around [`SmallRng`].
///
/// Draw order is part of the determinism contract: reordering draws between
/// releases changes game outcomes and invalidates recordings.
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    inner: SmallRng,
}

impl GameRng {
    /// Creates an RNG from an explicit seed, or from entropy when `None`.
    ///
    /// The effective seed is echoed by [`GameRng::seed`] so callers can
    /// persist it for reproducibility.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().next_u64());
        GameRng {
            seed,
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Returns the effective seed this RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rolls a single six-sided die.
    pub fn d6(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Picks a uniform index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero; callers check emptiness first.
    pub fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Returns true with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.gen::<f64>() < p
    }

    /// Shuffles a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
