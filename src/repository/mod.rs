//! Persistence for ship records.
//!
//! [`ShipRepository`] is the seam between the operations layer and storage.
//! Two backends implement it:
//!
//! - [`FileShipRepository`] keeps the collection in a JSON file
//! - [`InMemoryShipRepository`] keeps it in memory, for tests and embedding

pub mod in_memory;
pub mod ship_repository;
pub mod store;

pub use in_memory::InMemoryShipRepository;
pub use ship_repository::{FileShipRepository, ShipRepository};
pub use store::ShipStore;
