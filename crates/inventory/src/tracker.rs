//! In-memory view of the collection plus the mutation entry points.

use stockroom_core::{InventoryItem, StoreResult};
use stockroom_store::InventoryStore;

use crate::{ops, search};

/// The application's view of the collection: the last-fetched item list, the
/// current search text, and the filtered view derived from the two.
///
/// Every mutation goes through the store and is followed by a full
/// [`refresh`](Tracker::refresh) — there is no incremental or optimistic
/// update, and no coalescing of refreshes across back-to-back mutations.
/// Searches run against the last fetch, not the live store.
#[derive(Debug)]
pub struct Tracker<S> {
    store: S,
    items: Vec<InventoryItem>,
    query: String,
    filtered: Vec<InventoryItem>,
}

impl<S> Tracker<S>
where
    S: InventoryStore,
{
    /// A tracker with an empty view; call [`refresh`](Tracker::refresh) to
    /// load the collection.
    pub fn new(store: S) -> Self {
        Self {
            store,
            items: Vec::new(),
            query: String::new(),
            filtered: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The last-fetched item list, unfiltered.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// The items matching the current search text.
    pub fn filtered(&self) -> &[InventoryItem] {
        &self.filtered
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search text and recompute the filtered view from the
    /// last-fetched list. Does not touch the store.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.filtered = search::filter_items(&self.items, &self.query);
    }

    /// Re-read the entire collection and recompute the filtered view.
    pub async fn refresh(&mut self) -> StoreResult<()> {
        self.items = self.store.list().await?;
        self.filtered = search::filter_items(&self.items, &self.query);
        Ok(())
    }

    /// Add `quantity` of `name` (summing onto any existing record), then
    /// refresh the view.
    pub async fn add_item(&mut self, name: &str, quantity: u32) -> StoreResult<()> {
        ops::add_item(&self.store, name, quantity).await?;
        tracing::debug!(name, quantity, "item added");
        self.refresh().await
    }

    /// Rename and/or set an absolute quantity, then refresh the view.
    pub async fn update_item(
        &mut self,
        original_name: &str,
        new_name: &str,
        quantity: u32,
    ) -> StoreResult<()> {
        ops::update_item(&self.store, original_name, new_name, quantity).await?;
        tracing::debug!(original_name, new_name, quantity, "item updated");
        self.refresh().await
    }

    /// Remove one of `name` (deleting the record at quantity 1), then
    /// refresh the view.
    pub async fn remove_item(&mut self, name: &str) -> StoreResult<()> {
        ops::remove_item(&self.store, name).await?;
        tracing::debug!(name, "item removed");
        self.refresh().await
    }
}
