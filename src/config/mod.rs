//! Configuration management for fleet projects.
//!
//! The project config lives in `.fleet/config.md`: YAML frontmatter holds the
//! settings, the Markdown body is free-form notes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths::CONFIG_PATH;

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub paging: PagingConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load `.fleet/config.md` from the current directory, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_or_default(Path::new(CONFIG_PATH))
    }

    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);

        // A file with no frontmatter, or empty frontmatter, is all defaults
        let config: Config = match frontmatter {
            Some(yaml) if !yaml.trim().is_empty() => {
                serde_yaml::from_str(&yaml).context("Failed to parse config frontmatter")?
            }
            _ => Config::default(),
        };

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.paging.validate()?;
        self.log.validate()
    }

    /// Render as a config.md document.
    pub fn to_markdown(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config")?;
        Ok(format!(
            "---\n{}---\n\n# Fleet Config\n\nShip registry settings. `FLEET_LOG` overrides `log.level`.\n",
            yaml
        ))
    }
}

/// Split a document into its YAML frontmatter (between leading `---` fences)
/// and the remaining body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("\n---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 4..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}
