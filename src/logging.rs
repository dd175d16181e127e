//! Tracing subscriber setup for sift binaries.

use crate::error::{Result, SiftError};
use tracing_subscriber::EnvFilter;

/// Parse `EnvFilter` directives such as `sift=info,sift_engines=debug`.
///
/// # Errors
///
/// Returns [`SiftError::Logging`] if the directives are malformed.
pub fn parse_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| SiftError::Logging(format!("invalid filter: {e}")))
}

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; `default_filter` applies when it is unset
/// or unparsable.
///
/// # Errors
///
/// Returns [`SiftError::Logging`] if `default_filter` is malformed or a
/// global subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(default_filter)?,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| SiftError::Logging(e.to_string()))
}
