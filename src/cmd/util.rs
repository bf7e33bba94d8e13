//! Version and shell completion commands.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;
use std::path::Path;

use fleet::paths::CONFIG_PATH;
use fleet::repository::ShipRepository;

use crate::Cli;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print the version; with `verbose`, also the build and the project layout
/// seen from the current directory.
pub fn cmd_version(verbose: bool) -> Result<()> {
    println!("fleet {}", VERSION);

    if !verbose {
        return Ok(());
    }

    println!("commit: {}", env!("GIT_SHA"));
    println!("built:  {}", env!("BUILD_DATE"));

    let config_state = if Path::new(CONFIG_PATH).exists() {
        "present"
    } else {
        "absent, using defaults"
    };
    println!("config: {} ({})", CONFIG_PATH, config_state);

    // Layout details are informational; a broken config must not fail `version`
    if let Ok(config) = fleet::config::Config::load() {
        let ships = super::open_repository(&config)
            .and_then(|repo| repo.find_all())
            .map(|ships| ships.len().to_string())
            .unwrap_or_else(|_| "unreadable".to_string());
        println!("store:  {} ({} ships)", config.store.path.display(), ships);
    }

    Ok(())
}

/// Write a completion script for `shell` to stdout.
pub fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
