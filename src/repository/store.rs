//! The collection shared by both repository backends.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ship::{Ship, ShipId};

/// Ships keyed by id, plus the next id to hand out.
///
/// Iteration is in ascending id order, which gives queries without an
/// explicit order a stable result. Ids are never reused, even after a delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipStore {
    #[serde(default = "first_id")]
    next_id: ShipId,
    #[serde(default)]
    ships: BTreeMap<ShipId, Ship>,
}

fn first_id() -> ShipId {
    1
}

impl Default for ShipStore {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            ships: BTreeMap::new(),
        }
    }
}

impl ShipStore {
    pub fn all(&self) -> Vec<Ship> {
        self.ships.values().cloned().collect()
    }

    pub fn contains(&self, id: ShipId) -> bool {
        self.ships.contains_key(&id)
    }

    pub fn get(&self, id: ShipId) -> Option<Ship> {
        self.ships.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Insert or replace `ship`, assigning an id when it has none.
    ///
    /// Fails when the id leaves no successor to hand out next.
    pub fn put(&mut self, mut ship: Ship) -> Result<Ship> {
        let id = match ship.id {
            Some(id) => id,
            None => self.next_id,
        };
        if id >= self.next_id {
            self.next_id = successor(id)?;
        }
        ship.id = Some(id);
        self.ships.insert(id, ship.clone());
        Ok(ship)
    }

    pub fn remove(&mut self, id: ShipId) -> Option<Ship> {
        self.ships.remove(&id)
    }

    /// Rebuild the id index after loading, so an edited file with a stale
    /// `nextId` cannot hand out an id that is already taken.
    pub(crate) fn reconcile(&mut self) -> Result<()> {
        if let Some((&max, _)) = self.ships.iter().next_back() {
            self.next_id = self.next_id.max(successor(max)?);
        }
        for (id, ship) in self.ships.iter_mut() {
            ship.id = Some(*id);
        }
        Ok(())
    }
}

fn successor(id: ShipId) -> Result<ShipId> {
    id.checked_add(1)
        .ok_or_else(|| anyhow!("ship id {} is the largest possible id", id))
}
