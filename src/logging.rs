//! Logging setup.
//!
//! The library only emits `tracing` events. The binary installs a fmt
//! subscriber writing to stderr, filtered by `MASCTL_LOG` when set and by
//! the configured level otherwise.

use crate::error::{Result, SpecError};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a filter directive, e.g. `debug` or
/// `multi_agent_spec::validate=trace`.
pub const LOG_ENV: &str = "MASCTL_LOG";

/// Filter for a plain level name.
pub fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::new(level)
}

/// `MASCTL_LOG` if set and parseable, else `level`.
pub fn build_env_filter(level: &str) -> EnvFilter {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => level_filter(level),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| SpecError::ConfigError(format!("failed to initialize logging: {}", e)))
}
