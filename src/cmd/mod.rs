//! Command module structure for fleet CLI

use anyhow::Result;

use fleet::config::Config;
use fleet::repository::FileShipRepository;

pub mod args;
pub mod init;
pub mod list;
pub mod ship;
pub mod util;

/// Open the ship store named by the config.
///
/// Works without `fleet init`: a missing store file is an empty registry.
pub fn open_repository(config: &Config) -> Result<FileShipRepository> {
    FileShipRepository::open(&config.store.path)
}
