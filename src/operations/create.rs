//! Ship creation operation.

use tracing::info;

use crate::domain::normalize_for_create;
use crate::error::Result;
use crate::repository::ShipRepository;
use crate::ship::{Ship, ShipDraft};

/// Validate `draft` and store it as a new ship.
///
/// Nothing is written when validation fails.
///
/// # Returns
///
/// The stored ship, with its assigned id and computed rating.
pub fn create_ship<R>(repo: &mut R, draft: &ShipDraft) -> Result<Ship>
where
    R: ShipRepository + ?Sized,
{
    let ship = normalize_for_create(draft)?;
    let saved = repo.save(ship)?;

    info!(id = ?saved.id, name = %saved.name, rating = saved.rating, "created ship");
    Ok(saved)
}
