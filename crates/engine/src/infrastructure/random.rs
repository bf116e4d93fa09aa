//! Random source implementations.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infrastructure::ports::RandomPort;

/// System random - uses the thread-local generator.
#[derive(Debug, Clone, Default)]
pub struct ThreadRngRandom;

impl ThreadRngRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for ThreadRngRandom {
    fn random_i32(&self) -> i32 {
        rand::thread_rng().gen()
    }

    fn random_range(&self, min: i32, max: i32) -> i32 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Seeded random - the same seed always yields the same sequence of draws.
///
/// Draws go through a mutex, so a single instance can be shared across
/// threads and every interleaved draw still comes from the one sequence.
#[derive(Debug)]
pub struct SeededRandom {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// The seed this generator was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn with_rng<T>(&self, draw: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic while holding the lock cannot leave StdRng half-updated
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        draw(&mut *rng)
    }
}

impl RandomPort for SeededRandom {
    fn random_i32(&self) -> i32 {
        self.with_rng(|rng| rng.gen())
    }

    fn random_range(&self, min: i32, max: i32) -> i32 {
        self.with_rng(|rng| rng.gen_range(min..=max))
    }
}
