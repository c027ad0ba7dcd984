//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence over the configured `server.log_level`.

use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::AppConfig;

/// Errors that can occur while installing the global subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to install tracing subscriber: {0}")]
    InstallFailed(String),
}

/// Builds the log filter from `RUST_LOG` or the configured directive.
pub fn env_filter(config: &AppConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.server.log_level)?),
    }
}

/// Installs the global tracing subscriber.
///
/// Uses the JSON formatter when `features.json_logs` is set, otherwise the
/// compact human-readable one.
pub fn init(config: &AppConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;
    let builder = fmt().with_env_filter(filter).with_target(true);

    let result = if config.features.json_logs {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    result.map_err(|e| TelemetryError::InstallFailed(e.to_string()))
}
