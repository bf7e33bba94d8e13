//! Domain logic module containing pure validation functions.
//!
//! Nothing here performs I/O; callers load and save records through a
//! [`crate::repository::ShipRepository`].

pub mod ship_validation;

pub use ship_validation::{
    check_id, is_valid_id, normalize_for_create, normalize_for_update, parse_id,
};
