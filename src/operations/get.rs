//! Ship lookup operation.

use crate::domain::check_id;
use crate::error::{Result, ShipError};
use crate::repository::ShipRepository;
use crate::ship::{Ship, ShipId};

/// Load a ship by id.
///
/// Fails with `InvalidInput` for a non-positive id and `NotFound` when no
/// ship has it.
pub fn get_ship<R>(repo: &R, id: i64) -> Result<Ship>
where
    R: ShipRepository + ?Sized,
{
    let id = require_existing(repo, id)?;
    repo.find_by_id(id)?.ok_or(ShipError::NotFound(id))
}

/// Check `id` and make sure storage holds it.
pub(crate) fn require_existing<R>(repo: &R, id: i64) -> Result<ShipId>
where
    R: ShipRepository + ?Sized,
{
    let id = check_id(Some(id))?;
    if !repo.exists_by_id(id)? {
        return Err(ShipError::NotFound(id));
    }
    Ok(id)
}
