use std::collections::HashMap;
use std::sync::RwLock;

use stockroom_core::{InventoryItem, StoreError, StoreResult};

use crate::InventoryStore;

/// In-memory inventory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<HashMap<String, u32>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with initial records.
    pub fn with_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        Self {
            inner: RwLock::new(items.into_iter().collect()),
        }
    }
}

#[async_trait::async_trait]
impl InventoryStore for InMemoryStore {
    async fn get(&self, name: &str) -> StoreResult<Option<u32>> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::unavailable("store lock poisoned"))?;
        Ok(map.get(name).copied())
    }

    async fn put(&self, name: &str, quantity: u32) -> StoreResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::unavailable("store lock poisoned"))?;
        map.insert(name.to_string(), quantity);
        Ok(())
    }

    async fn delete(&self, name: &str) -> StoreResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::unavailable("store lock poisoned"))?;
        map.remove(name);
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<InventoryItem>> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::unavailable("store lock poisoned"))?;
        Ok(map
            .iter()
            .map(|(name, quantity)| InventoryItem::new(name.clone(), *quantity))
            .collect())
    }
}
