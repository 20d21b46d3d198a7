//! Logger initialization.

use std::fs::File;
use std::sync::Once;

use anyhow::{Context, Result};

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Append to a file; the terminal is busy with the game.
    File(String),
    /// No logger at all.
    Off,
}

/// Logger configuration.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "gravity_core=debug").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub target: LogTarget,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            target: LogTarget::Stderr,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Filter precedence is `config.filter`, then
/// `RUST_LOG`, then `info`.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let target = match config.target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => env_logger::Target::Stderr,
        LogTarget::File(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("open log file {path}"))?;
            env_logger::Target::Pipe(Box::new(file))
        }
    };

    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.target(target);
        // Another logger may already be installed.
        let _ = builder.try_init();

        log::debug!("logging initialized");
    });
    Ok(())
}
