//! Ship records and the values derived from them.
//!
//! - [`model`] - the stored [`Ship`] record and its [`ShipType`]
//! - [`draft`] - [`ShipDraft`], a candidate record with every field optional
//! - [`date`] - production date parsing and year extraction (UTC)
//! - [`rating`] - the derived rating formula

pub mod date;
pub mod draft;
pub mod model;
pub mod rating;

pub use date::{parse_prod_date, year_of};
pub use draft::ShipDraft;
pub use model::{Ship, ShipId, ShipType};
pub use rating::compute_rating;
