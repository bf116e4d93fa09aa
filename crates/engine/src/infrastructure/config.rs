//! Environment-driven configuration.
//!
//! Values come from the process environment after `dotenvy` has loaded any
//! `.env` file from the working directory.

use thiserror::Error;

/// Environment variable holding the generator seed.
pub const RANDOM_SEED_VAR: &str = "SANDBOX_RANDOM_SEED";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid SANDBOX_RANDOM_SEED '{value}': {reason}")]
    InvalidSeed { value: String, reason: String },
}

/// How the random source should be built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandomConfig {
    /// `Some` for a reproducible seeded generator, `None` for the thread RNG.
    pub seed: Option<u64>,
}

impl RandomConfig {
    /// A config that always builds a seeded generator.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let seed = match lookup(RANDOM_SEED_VAR) {
            Some(raw) if !raw.trim().is_empty() => {
                let seed = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidSeed {
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
                Some(seed)
            }
            _ => None,
        };

        Ok(Self { seed })
    }
}
