use anyhow::Result;

use crate::ship::{Ship, ShipId};

use super::ship_repository::ShipRepository;
use super::store::ShipStore;

/// In-memory implementation of ShipRepository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryShipRepository {
    store: ShipStore,
}

impl InMemoryShipRepository {
    /// Create a new empty InMemoryShipRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new InMemoryShipRepository with pre-populated ships.
    /// Ships without an id are assigned one in order.
    pub fn with_ships(ships: Vec<Ship>) -> Result<Self> {
        let mut store = ShipStore::default();
        for ship in ships {
            store.put(ship)?;
        }
        Ok(Self { store })
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl ShipRepository for InMemoryShipRepository {
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
        self.store.put(ship)
    }

    fn delete_by_id(&mut self, id: ShipId) -> Result<()> {
        self.store.remove(id);
        Ok(())
    }
}
