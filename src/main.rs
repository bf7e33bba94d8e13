//! CLI entry point and command handlers for fleet.

mod cmd;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use std::process::ExitCode;

use fleet::config::Config;
use fleet::ui::colors;
use fleet::query::ShipOrder;
use fleet::ShipError;

use cmd::args::{FilterArgs, ShipFields};

/// Exit code for invalid input (matches clap's usage-error code)
const EXIT_INVALID_INPUT: u8 = 2;
/// Exit code when the targeted ship does not exist
const EXIT_NOT_FOUND: u8 = 3;

#[derive(Parser)]
#[command(name = "fleet")]
#[command(version)]
#[command(about = "Ship registry with validated records and filtered queries", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    fleet init\n    fleet add --name Falcon --planet Mars --ship-type merchant \\\n              --prod-date 3000-01-01 --speed 0.5 --crew-size 10\n    fleet list --order rating"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize fleet in the current directory
    Init {
        /// Overwrite an existing .fleet/config.md (the ship store is kept)
        #[arg(long)]
        force: bool,
    },
    /// Register a new ship
    ///
    /// Required: --name, --planet, --ship-type, --prod-date, --speed, --crew-size.
    /// The rating is always computed; it cannot be set.
    Add {
        #[command(flatten)]
        fields: ShipFields,
        /// Print the stored ship as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a ship
    Show {
        /// Ship ID
        #[arg(allow_hyphen_values = true)]
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change some fields of a ship; the rating is recomputed
    Update {
        /// Ship ID
        #[arg(allow_hyphen_values = true)]
        id: String,
        #[command(flatten)]
        fields: ShipFields,
        /// Print the updated ship as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a ship
    Delete {
        /// Ship ID
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// List ships, one page at a time
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Sort ascending by: id, speed, date, rating
        #[arg(long, value_name = "KEY")]
        order: Option<ShipOrder>,
        /// Zero-based page number (default: 0)
        #[arg(long, value_name = "N")]
        page_number: Option<usize>,
        /// Ships per page (default: paging.default_page_size, 3)
        #[arg(long, value_name = "N")]
        page_size: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Count ships matching the filters
    Count {
        #[command(flatten)]
        filters: FilterArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show version information
    Version {
        /// Include commit and build date
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", colors::error("Error:").bold(), err);
            ExitCode::from(exit_code_for(&err))
        }
    }
}

/// Map an error to the process exit code by its kind.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ShipError>() {
        Some(ShipError::InvalidInput(_)) => EXIT_INVALID_INPUT,
        Some(ShipError::NotFound(_)) => EXIT_NOT_FOUND,
        _ => 1,
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var("FLEET_QUIET", "1");
    }

    match cli.command {
        Commands::Init { force } => cmd::init::cmd_init(force),
        Commands::Add { fields, json } => cmd::ship::cmd_add(&load_config()?, fields, json),
        Commands::Show { id, json } => cmd::ship::cmd_show(&load_config()?, &id, json),
        Commands::Update { id, fields, json } => {
            cmd::ship::cmd_update(&load_config()?, &id, fields, json)
        }
        Commands::Delete { id } => cmd::ship::cmd_delete(&load_config()?, &id),
        Commands::List {
            filters,
            order,
            page_number,
            page_size,
            json,
        } => cmd::list::cmd_list(
            &load_config()?,
            filters,
            order,
            page_number,
            page_size,
            json,
        ),
        Commands::Count { filters, json } => {
            cmd::list::cmd_count(&load_config()?, filters, json)
        }
        Commands::Version { verbose } => cmd::util::cmd_version(verbose),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
    }
}

/// Load the project config and start logging with its level.
fn load_config() -> Result<Config> {
    let config = Config::load()?;
    fleet::logging::init(&config.log.level)?;
    tracing::debug!(store = %config.store.path.display(), "loaded config");
    Ok(config)
}
