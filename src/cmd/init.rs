//! Initialize fleet in a project directory
//!
//! Creates the `.fleet` directory, writes `config.md` with default settings
//! and prepares the store directory.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use fleet::config::Config;
use fleet::paths::{CONFIG_PATH, FLEET_DIR, STORE_DIR};

/// Result of writing the config file
#[derive(Debug, PartialEq, Eq)]
pub enum InitOutcome {
    /// Fresh project
    Created,
    /// Existing config replaced because of --force
    Overwritten,
    /// Config already present; nothing written
    AlreadyInitialized,
}

pub fn cmd_init(force: bool) -> Result<()> {
    let outcome = init_at(Path::new("."), force)?;

    if fleet::ui::is_quiet() {
        return Ok(());
    }

    match outcome {
        InitOutcome::Created => {
            println!("{} Initialized fleet in {}", "✓".green(), FLEET_DIR.cyan());
            println!("Config: {}", CONFIG_PATH);
        }
        InitOutcome::Overwritten => {
            println!("{} Rewrote {} with defaults", "✓".green(), CONFIG_PATH.cyan());
        }
        InitOutcome::AlreadyInitialized => {
            println!(
                "{} Fleet already initialized. Use --force to reset {}",
                "⚠".yellow(),
                CONFIG_PATH
            );
        }
    }

    Ok(())
}

/// Create the fleet layout under `base`. The ship store itself is left
/// alone, even with `force`.
pub fn init_at(base: &Path, force: bool) -> Result<InitOutcome> {
    let config_path = base.join(CONFIG_PATH);
    let store_dir = base.join(STORE_DIR);

    let existed = config_path.exists();
    if existed && !force {
        return Ok(InitOutcome::AlreadyInitialized);
    }

    fs::create_dir_all(&store_dir)
        .with_context(|| format!("Failed to create {}", store_dir.display()))?;

    let content = Config::default().to_markdown()?;
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(if existed {
        InitOutcome::Overwritten
    } else {
        InitOutcome::Created
    })
}
