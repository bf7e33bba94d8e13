//! Ship deletion operation.

use tracing::info;

use crate::error::Result;
use crate::repository::ShipRepository;

use super::get::require_existing;

/// Delete the ship with `id`.
///
/// The id must be valid and present in storage.
pub fn delete_ship<R>(repo: &mut R, id: i64) -> Result<()>
where
    R: ShipRepository + ?Sized,
{
    let id = require_existing(repo, id)?;
    repo.delete_by_id(id)?;

    info!(id, "deleted ship");
    Ok(())
}
