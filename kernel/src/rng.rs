//! Uniform randomness as an explicit capability.
//!
//! Nothing in the kernel or the search layer reaches for an ambient generator.
//! Every stochastic call takes a `&mut dyn UniformSource`, so a run is fully
//! determined by the source it is handed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform integers.
pub trait UniformSource {
    /// Draw uniformly from `0..upper`.
    ///
    /// Callers never pass `upper == 0`.
    fn below(&mut self, upper: usize) -> usize;
}

/// Seeded ChaCha8 source. The same seed always yields the same draws.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
    seed: u64,
    draws: u64,
}

impl SeededSource {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            draws: 0,
        }
    }

    /// Seed from OS entropy. The chosen seed is still recorded in [`Self::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this source was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of draws taken so far.
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl UniformSource for SeededSource {
    fn below(&mut self, upper: usize) -> usize {
        debug_assert!(upper > 0, "below(0) has no valid draw");
        self.draws += 1;
        self.rng.gen_range(0..upper)
    }
}

/// Replays a fixed script of draws, each reduced modulo `upper`.
///
/// Cycles when the script runs out. An empty script always draws `0`.
/// Intended for tests that need to steer a walk down a known path.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Always draw index 0.
    #[must_use]
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Number of draws taken so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn below(&mut self, upper: usize) -> usize {
        let at = self.cursor;
        self.cursor += 1;
        if self.script.is_empty() {
            return 0;
        }
        self.script[at % self.script.len()] % upper
    }
}
