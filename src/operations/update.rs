//! Ship update operation.
//!
//! Canonical implementation for partial updates with validation.

use tracing::info;

use crate::domain::normalize_for_update;
use crate::error::{Result, ShipError};
use crate::repository::ShipRepository;
use crate::ship::{Ship, ShipDraft};

use super::get::require_existing;

/// Apply the fields present on `draft` to the ship with `id` and save it.
///
/// Absent fields are left as they are. The rating is recomputed from the
/// resulting record. If any provided field is invalid nothing is saved.
pub fn update_ship<R>(repo: &mut R, id: i64, draft: &ShipDraft) -> Result<Ship>
where
    R: ShipRepository + ?Sized,
{
    let id = require_existing(repo, id)?;
    let existing = repo.find_by_id(id)?.ok_or(ShipError::NotFound(id))?;

    let updated = normalize_for_update(&existing, draft)?;
    let saved = repo.save(updated)?;

    info!(id, rating = saved.rating, "updated ship");
    Ok(saved)
}
