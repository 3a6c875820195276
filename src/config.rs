//! Runtime configuration read from environment variables.

use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

pub const SEED_VAR: &str = "BLOCKFALL_SEED";
pub const LOG_PATH_VAR: &str = "BLOCKFALL_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "BLOCKFALL_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be an unsigned 64-bit integer, got {value:?}")]
    InvalidSeed {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Fixed RNG seed; `None` derives one from the wall clock per game.
    pub seed: Option<u64>,
    /// Log file; logging is off when unset.
    pub log_path: Option<PathBuf>,
    /// `EnvFilter` directives.
    pub log_filter: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty(SEED_VAR)
            .map(|value| {
                value
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidSeed {
                        var: SEED_VAR,
                        value,
                        source,
                    })
            })
            .transpose()?;

        let log_path = non_empty(LOG_PATH_VAR).map(PathBuf::from);
        let log_filter =
            non_empty(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            seed,
            log_path,
            log_filter,
        })
    }

    /// Seed for the next game.
    pub fn game_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
