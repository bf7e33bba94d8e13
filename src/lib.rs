//! # Fleet - Ship Registry
//!
//! Fleet keeps a registry of ships and answers filtered, sorted and paged
//! queries over it. Every stored ship has been validated, and its rating is
//! derived from speed, wear and age rather than supplied by the caller.
//!
//! ## Core Concepts
//!
//! - **Ships**: records with a name, home planet, type, production date,
//!   used flag, speed and crew size
//! - **Drafts**: candidate records where every field is optional, used for
//!   both create and partial update
//! - **Rating**: `80 * speed * k / (3019 - year + 1)`, rounded to hundredths,
//!   with `k = 0.5` for used ships
//! - **Queries**: optional filters combined with AND, an optional sort key
//!   and a page
//!
//! ## Modules
//!
//! - [`ship`] - Ship records, drafts, dates and the rating formula
//! - [`domain`] - Pure validation and normalization
//! - [`query`] - Filtering, ordering and paging
//! - [`repository`] - Storage trait with file and in-memory backends
//! - [`operations`] - Create, get, update, delete, list and count
//! - [`config`] - Project configuration (`.fleet/config.md`)
//! - [`logging`] - `tracing` subscriber setup
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use fleet::operations::{create_ship, list_ships};
//! use fleet::query::{ShipFilter, ShipOrder};
//! use fleet::repository::InMemoryShipRepository;
//! use fleet::ship::{ShipDraft, ShipType};
//!
//! let mut repo = InMemoryShipRepository::new();
//! let draft = ShipDraft {
//!     name: Some("Falcon".to_string()),
//!     planet: Some("Mars".to_string()),
//!     ship_type: Some(ShipType::Merchant),
//!     prod_date: Some(Utc.with_ymd_and_hms(3000, 1, 1, 0, 0, 0).unwrap()),
//!     speed: Some(0.5),
//!     crew_size: Some(10),
//!     ..Default::default()
//! };
//!
//! let ship = create_ship(&mut repo, &draft).unwrap();
//! assert_eq!(ship.rating, 2.0);
//!
//! let fast = ShipFilter { min_speed: Some(0.4), ..Default::default() };
//! let ships = list_ships(&repo, &fast, Some(ShipOrder::Rating)).unwrap();
//! assert_eq!(ships.len(), 1);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod operations;
pub mod query;
pub mod repository;
pub mod ship;
pub mod ui;

pub use error::ShipError;

/// Default path constants for the fleet directory structure.
pub mod paths {
    /// Project directory: `.fleet`
    pub const FLEET_DIR: &str = ".fleet";
    /// Project config file: `.fleet/config.md`
    pub const CONFIG_PATH: &str = ".fleet/config.md";
    /// Directory holding the ship store: `.fleet/store`
    pub const STORE_DIR: &str = ".fleet/store";
    /// Default ship store file: `.fleet/store/ships.json`
    pub const STORE_PATH: &str = ".fleet/store/ships.json";
}
