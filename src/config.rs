//! Runtime configuration read from the environment.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

/// Start-up configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub tick_ms: u32,
    /// `env_logger` filter; `None` falls back to `RUST_LOG`.
    pub log_filter: Option<String>,
    /// Log file for the interactive runner.
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: time_seed(),
            tick_ms: TICK_MS,
            log_filter: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from `GRAVITY_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = var("GRAVITY_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(time_seed);

        let tick_ms = var("GRAVITY_TICK_MS")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(TICK_MS)
            .clamp(1, 1000);

        Self {
            seed,
            tick_ms,
            log_filter: var("GRAVITY_LOG"),
            log_path: var("GRAVITY_LOG_PATH"),
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}
