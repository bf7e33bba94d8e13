use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ship::{Ship, ShipId};

use super::store::ShipStore;

/// A trait for loading and saving ships from a storage backend.
pub trait ShipRepository {
    /// All ships, in storage iteration order.
    fn find_all(&self) -> Result<Vec<Ship>>;

    /// Check if a ship with this id is stored.
    fn exists_by_id(&self, id: ShipId) -> Result<bool>;

    /// Load a ship by its id.
    fn find_by_id(&self, id: ShipId) -> Result<Option<Ship>>;

    /// Store a ship. A ship without an id is assigned one; the stored
    /// record is returned.
    fn save(&mut self, ship: Ship) -> Result<Ship>;

    /// Remove a ship. Removing an absent id is not an error.
    fn delete_by_id(&mut self, id: ShipId) -> Result<()>;
}

/// File-based implementation of ShipRepository.
///
/// The whole collection is read when the repository is opened and the file
/// is rewritten after every change.
pub struct FileShipRepository {
    path: PathBuf,
    store: ShipStore,
}

impl FileShipRepository {
    /// Open the store at `path`. A missing file is an empty store; it is
    /// created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let store = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read ship store {}", path.display()))?;
            if content.trim().is_empty() {
                ShipStore::default()
            } else {
                let mut store: ShipStore = serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse ship store {}", path.display()))?;
                store
                    .reconcile()
                    .with_context(|| format!("Invalid ship store {}", path.display()))?;
                store
            }
        } else {
            ShipStore::default()
        };

        tracing::debug!(path = %path.display(), ships = store.len(), "opened ship store");

        Ok(Self { path, store })
    }

    /// Get the store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `store` to disk. Callers swap it in only after this succeeds,
    /// so a failed write leaves the loaded collection as it was.
    fn write_store(&self, store: &ShipStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create store directory {}", parent.display())
                })?;
            }
        }

        let json = serde_json::to_string_pretty(store)?;

        // Write next to the target and rename so a crash never leaves half a file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .with_context(|| format!("Failed to write ship store {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace ship store {}", self.path.display()))?;

        Ok(())
    }
}

impl ShipRepository for FileShipRepository {
    fn find_all(&self) -> Result<Vec<Ship>> {
        Ok(self.store.all())
    }

    fn exists_by_id(&self, id: ShipId) -> Result<bool> {
        Ok(self.store.contains(id))
    }

    fn find_by_id(&self, id: ShipId) -> Result<Option<Ship>> {
        Ok(self.store.get(id))
    }

    fn save(&mut self, ship: Ship) -> Result<Ship> {
        let mut next = self.store.clone();
        let saved = next.put(ship)?;
        self.write_store(&next)?;
        self.store = next;
        Ok(saved)
    }

    fn delete_by_id(&mut self, id: ShipId) -> Result<()> {
        if !self.store.contains(id) {
            return Ok(());
        }
        let mut next = self.store.clone();
        next.remove(id);
        self.write_store(&next)?;
        self.store = next;
        Ok(())
    }
}
