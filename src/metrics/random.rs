//! Randomness providers for the mock data generators
//!
//! Generators never touch `rand` directly; they draw through [`RandomSource`]
//! so callers can hand in a seeded or scripted source.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed values over closed ranges
pub trait RandomSource {
    /// Draw a float uniformly from `[low, high]`
    fn uniform_f64(&mut self, low: f64, high: f64) -> f64;

    /// Draw an integer uniformly from `[low, high]`
    fn uniform_u32(&mut self, low: u32, high: u32) -> u32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn uniform_f64(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform_f64(low, high)
    }

    fn uniform_u32(&mut self, low: u32, high: u32) -> u32 {
        (**self).uniform_u32(low, high)
    }
}

/// Thread-local generator, one per worker thread
///
/// Concurrent requests on different threads never share state, so their
/// draws are uncorrelated.
#[derive(Debug, Clone, Default)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl RandomSource for ThreadRandom {
    fn uniform_f64(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low..=high)
    }

    fn uniform_u32(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

/// Deterministic generator for reproducible output
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform_f64(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low..=high)
    }

    fn uniform_u32(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}
