//! Validation logic for configuration values.

use anyhow::Result;

use super::defaults::{LogConfig, PagingConfig};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

impl PagingConfig {
    /// Validate paging configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            anyhow::bail!("paging.default_page_size must be greater than 0");
        }
        Ok(())
    }
}

impl LogConfig {
    /// Validate logging configuration.
    ///
    /// A bare level must be one of the known names; anything with `=` or `,`
    /// is treated as a filter directive and checked when the subscriber is
    /// built.
    pub fn validate(&self) -> Result<()> {
        let level = self.level.trim();
        if level.contains('=') || level.contains(',') {
            return Ok(());
        }
        if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            anyhow::bail!(
                "log.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.level
            );
        }
        Ok(())
    }
}
