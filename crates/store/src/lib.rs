//! `stockroom-store` — adapters for the backing document collection.
//!
//! The collection is treated as an opaque key/value mapping from item name to
//! quantity. Adapters perform no validation: `put` creates or overwrites and
//! never deletes, so callers must ensure `quantity >= 1` before calling.

pub mod memory;
pub mod remote;

pub use memory::InMemoryStore;
pub use remote::{RemoteStore, StoreConfig};

use std::sync::Arc;

use stockroom_core::{InventoryItem, StoreResult};

/// Async key/value access to the inventory collection.
///
/// All operations may fail with [`stockroom_core::StoreError::Unavailable`]
/// when the collection cannot be reached. `list` makes no ordering guarantee.
#[async_trait::async_trait]
pub trait InventoryStore: Send + Sync {
    /// Stored quantity for `name`, or `None` if no record exists.
    async fn get(&self, name: &str) -> StoreResult<Option<u32>>;

    /// Create or overwrite the record for `name`. Never deletes.
    async fn put(&self, name: &str, quantity: u32) -> StoreResult<()>;

    /// Remove the record for `name` if present; no-op when absent.
    async fn delete(&self, name: &str) -> StoreResult<()>;

    /// Every current record, in whatever order the backing store returns.
    async fn list(&self) -> StoreResult<Vec<InventoryItem>>;
}

#[async_trait::async_trait]
impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    async fn get(&self, name: &str) -> StoreResult<Option<u32>> {
        (**self).get(name).await
    }

    async fn put(&self, name: &str, quantity: u32) -> StoreResult<()> {
        (**self).put(name, quantity).await
    }

    async fn delete(&self, name: &str) -> StoreResult<()> {
        (**self).delete(name).await
    }

    async fn list(&self) -> StoreResult<Vec<InventoryItem>> {
        (**self).list().await
    }
}
