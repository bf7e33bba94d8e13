//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::paths::STORE_PATH;
use crate::query::DEFAULT_PAGE_SIZE;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_store_path, PathBuf, PathBuf::from(STORE_PATH));
default_fn!(default_page_size, usize, DEFAULT_PAGE_SIZE);
default_fn!(default_log_level, String, "warn".to_string());

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// Where ships are persisted
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path of the JSON store file, relative to the working directory
    /// (default: .fleet/store/ships.json)
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Paging defaults for `fleet list`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PagingConfig {
    /// Page size when --page-size is not given (default: 3, must be >= 1)
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log level or filter directive (default: warn).
    /// `FLEET_LOG` overrides it.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
