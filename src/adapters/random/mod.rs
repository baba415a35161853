//! Random sources backed by `rand`

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::core::ports::RandomSource;

/// Random source using the thread-local generator
#[derive(Debug, Clone)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadRandom {
    /// Create a source using `rand::thread_rng`
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Deterministic random source seeded with a fixed value
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a source from a seed; equal seeds give equal sequences
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
