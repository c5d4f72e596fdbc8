//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::utils::error::{Result, UploaderError};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global tracing subscriber.
///
/// An unparseable level falls back to `info`. `RUST_LOG` is not consulted;
/// the level comes from configuration or the command line.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| UploaderError::Config(format!("Invalid log level: {}", e)))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry
            .with(fmt::layer().json().with_target(false))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_thread_ids(false))
            .try_init()
    };

    result.map_err(|e| UploaderError::Config(format!("Failed to initialize logging: {}", e)))
}
