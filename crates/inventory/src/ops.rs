//! Mutation rules for the stock collection.
//!
//! Each operation reads current state, decides, and overwrites. There is no
//! compare-and-swap: two mutations issued concurrently for the same name
//! race, and the last `put` wins. That is an accepted limitation of the
//! design, preserved here rather than papered over.

use stockroom_store::InventoryStore;

use stockroom_core::StoreResult;

/// Add `quantity` of `name`.
///
/// If a record already exists the quantities are summed; the new amount is
/// never overwritten onto an existing record.
pub async fn add_item<S>(store: &S, name: &str, quantity: u32) -> StoreResult<()>
where
    S: InventoryStore + ?Sized,
{
    match store.get(name).await? {
        Some(existing) => store.put(name, existing.saturating_add(quantity)).await,
        None => store.put(name, quantity).await,
    }
}

/// Set `original_name` to `new_name` with an absolute `quantity`.
///
/// When the names differ this is a rename-with-replace: the new name is
/// written first, then the old record deleted. Any record already stored at
/// `new_name` is overwritten, not merged — an asymmetry with [`add_item`]
/// kept for compatibility with the original behavior.
pub async fn update_item<S>(
    store: &S,
    original_name: &str,
    new_name: &str,
    quantity: u32,
) -> StoreResult<()>
where
    S: InventoryStore + ?Sized,
{
    if original_name != new_name {
        store.put(new_name, quantity).await?;
        store.delete(original_name).await
    } else {
        store.put(original_name, quantity).await
    }
}

/// Remove exactly one `name`.
///
/// Deletes the record when the stored quantity is 1, so a quantity of zero is
/// never persisted. A no-op when no record exists.
pub async fn remove_item<S>(store: &S, name: &str) -> StoreResult<()>
where
    S: InventoryStore + ?Sized,
{
    match store.get(name).await? {
        None => Ok(()),
        Some(1) => store.delete(name).await,
        Some(quantity) => store.put(name, quantity - 1).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockroom_store::InMemoryStore;

    #[tokio::test]
    async fn add_sums_onto_existing_record() {
        let store = InMemoryStore::new();
        add_item(&store, "flour", 3).await.unwrap();
        add_item(&store, "flour", 4).await.unwrap();
        assert_eq!(store.get("flour").await.unwrap(), Some(7));
    }

    #[tokio::test]
    async fn add_creates_absent_record() {
        let store = InMemoryStore::new();
        add_item(&store, "flour", 3).await.unwrap();
        assert_eq!(store.get("flour").await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn same_name_update_is_absolute_not_additive() {
        let store = InMemoryStore::with_items([("milk".to_string(), 9)]);
        update_item(&store, "milk", "milk", 5).await.unwrap();
        assert_eq!(store.get("milk").await.unwrap(), Some(5));
    }

    #[tokio::test]
    async fn rename_deletes_old_and_overwrites_target() {
        let store = InMemoryStore::with_items([
            ("milk".to_string(), 2),
            ("oat-milk".to_string(), 10),
        ]);
        update_item(&store, "milk", "oat-milk", 3).await.unwrap();
        assert_eq!(store.get("milk").await.unwrap(), None);
        // Overwrite, not merge: 3, never 13.
        assert_eq!(store.get("oat-milk").await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn remove_decrements_above_one() {
        let store = InMemoryStore::with_items([("eggs".to_string(), 3)]);
        remove_item(&store, "eggs").await.unwrap();
        assert_eq!(store.get("eggs").await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn remove_at_one_deletes_the_record() {
        let store = InMemoryStore::with_items([("eggs".to_string(), 1)]);
        remove_item(&store, "eggs").await.unwrap();
        assert_eq!(store.get("eggs").await.unwrap(), None);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_absent_is_a_noop() {
        let store = InMemoryStore::new();
        remove_item(&store, "eggs").await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_store_scenario() {
        let store = InMemoryStore::new();
        add_item(&store, "apple", 3).await.unwrap();
        assert_eq!(
            store.list().await.unwrap(),
            vec![stockroom_core::InventoryItem::new("apple", 3)]
        );

        remove_item(&store, "apple").await.unwrap();
        remove_item(&store, "apple").await.unwrap();
        assert_eq!(store.get("apple").await.unwrap(), Some(1));

        remove_item(&store, "apple").await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    proptest! {
        /// Property: any sequence of adds for one name stores their sum.
        #[test]
        fn repeated_adds_sum(quantities in prop::collection::vec(1u32..1_000, 1..8)) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            rt.block_on(async {
                let store = InMemoryStore::new();
                for q in &quantities {
                    add_item(&store, "thing", *q).await.unwrap();
                }
                let total: u32 = quantities.iter().sum();
                assert_eq!(store.get("thing").await.unwrap(), Some(total));
            });
        }
    }
}
