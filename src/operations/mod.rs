//! Shared business logic layer for ship operations.
//!
//! This module provides the canonical implementation of the ship
//! operations. Each one validates its input, talks to a
//! [`ShipRepository`](crate::repository::ShipRepository) and returns a
//! [`ShipError`](crate::error::ShipError) on failure. The CLI is a thin
//! layer on top.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use create::create_ship;
pub use delete::delete_ship;
pub use get::get_ship;
pub use list::{count_ships, list_page, list_ships, ListOptions};
pub use update::update_ship;

pub use crate::query::paginate;
