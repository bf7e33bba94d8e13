//! Structured logging setup.
//!
//! Library code emits `tracing` events; the binary installs a subscriber
//! that writes them to stderr.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `fleet=debug`.
pub const LOG_ENV: &str = "FLEET_LOG";

/// Build the event filter. `FLEET_LOG` wins over the configured level.
pub fn build_filter(configured: &str) -> Result<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(directive.trim())
            .with_context(|| format!("Invalid {} directive '{}'", LOG_ENV, directive)),
        _ => EnvFilter::try_new(configured.trim())
            .with_context(|| format!("Invalid log level '{}'", configured)),
    }
}

/// Install the global stderr subscriber.
///
/// Returns `false` when a subscriber was already installed; the existing one
/// stays in place and keeps its filter.
pub fn init(configured: &str) -> Result<bool> {
    let filter = build_filter(configured)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(err) = installed {
        tracing::debug!(%err, "log subscriber already installed");
        return Ok(false);
    }
    Ok(true)
}
