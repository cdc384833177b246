//! Logging initialization
//!
//! Builds the global tracing subscriber from [`LoggingConfig`]. A
//! `RUST_LOG` environment variable overrides the configured level, which
//! keeps ad-hoc debugging possible without touching configuration.

use crate::config::types::LoggingConfig;
use porter_domain::error::{Error, Result};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// Fails when the level directive doesn't parse or when a subscriber was
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| Error::config_with_source("invalid log level directive", e))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| Error::config(format!("failed to initialize logging: {e}")))
}

/// Record the outcome of probing a configuration file
///
/// The loader calls this before the subscriber exists; events emitted
/// that early are dropped.
pub fn log_config_probed(path: &Path, found: bool) {
    if found {
        debug!(path = %path.display(), "loading configuration file");
    } else {
        debug!(path = %path.display(), "configuration file not found; using defaults and environment");
    }
}
