//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    config::RandomConfig,
    ports::RandomPort,
    random::{SeededRandom, ThreadRngRandom},
};
use crate::use_cases;

/// Main application state.
///
/// Owns the random source and every use case built on top of it.
pub struct App {
    pub random: Arc<dyn RandomPort>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub randomness: use_cases::ExtendedRandom,
}

impl App {
    /// Create a new App with the random source picked by `config`.
    pub fn new(config: &RandomConfig) -> Self {
        let random: Arc<dyn RandomPort> = match config.seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded random source");
                Arc::new(SeededRandom::new(seed))
            }
            None => {
                tracing::info!("Using thread-local random source");
                Arc::new(ThreadRngRandom::new())
            }
        };
        Self::with_random(random)
    }

    /// Create an App around an already-built random source.
    pub fn with_random(random: Arc<dyn RandomPort>) -> Self {
        let use_cases = UseCases {
            randomness: use_cases::ExtendedRandom::new(random.clone()),
        };
        Self { random, use_cases }
    }
}
