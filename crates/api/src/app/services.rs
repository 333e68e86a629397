use std::sync::Arc;

use tokio::sync::Mutex;

use stockroom_inventory::Tracker;
use stockroom_recipes::{CompletionClient, HttpCompletionClient};
use stockroom_store::{InMemoryStore, InventoryStore, RemoteStore, StoreConfig};

/// Always-fails stand-in used when no completion endpoint is configured.
/// Callers see the same fixed fallback string as for a real failure.
#[derive(Debug)]
struct UnconfiguredCompletion;

#[async_trait::async_trait]
impl CompletionClient for UnconfiguredCompletion {
    async fn ask(&self, _query: &str) -> Result<String, stockroom_core::CompletionError> {
        Err(stockroom_core::CompletionError::unreachable(
            "no completion endpoint configured",
        ))
    }
}

/// Shared state handed to every handler.
///
/// The tracker holds the single in-memory view of the collection; the mutex
/// serializes handlers the way the original single-threaded event loop did.
/// Mutations issued concurrently against the backing store itself still race
/// last-put-wins, exactly as before.
pub struct AppServices {
    pub tracker: Mutex<Tracker<Arc<dyn InventoryStore>>>,
    pub completion: Arc<dyn CompletionClient>,
}

impl AppServices {
    pub fn new(store: Arc<dyn InventoryStore>, completion: Arc<dyn CompletionClient>) -> Self {
        Self {
            tracker: Mutex::new(Tracker::new(store)),
            completion,
        }
    }

    /// Wire services from the environment.
    ///
    /// Falls back to an in-memory store and an always-failing completion
    /// client when the corresponding endpoints are unset, so the binary can
    /// run locally without credentials.
    pub fn from_env() -> anyhow::Result<Self> {
        let store: Arc<dyn InventoryStore> = match StoreConfig::from_env() {
            Some(config) => Arc::new(RemoteStore::new(config)?),
            None => {
                tracing::warn!("STOCKROOM_STORE_URL not set; using in-memory store");
                Arc::new(InMemoryStore::new())
            }
        };

        let completion: Arc<dyn CompletionClient> = match HttpCompletionClient::from_env() {
            Some(client) => Arc::new(client),
            None => {
                tracing::warn!("STOCKROOM_COMPLETION_URL not set; recipe suggestions disabled");
                Arc::new(UnconfiguredCompletion)
            }
        };

        Ok(Self::new(store, completion))
    }
}
