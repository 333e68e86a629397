//! HTTP adapter for the remote document collection.
//!
//! The collection is addressed as `{base}/collections/{collection}` with one
//! document per item name, each holding `{"quantity": <int>}`. Credentials
//! come from the environment; there is no retry and no timeout beyond the
//! client default.

use std::collections::HashMap;

use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryItem, StoreError, StoreResult};

use crate::InventoryStore;

/// Connection settings for the remote collection.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub collection: String,
    pub api_key: Option<String>,
}

impl StoreConfig {
    /// Read settings from the environment.
    ///
    /// Returns `None` when `STOCKROOM_STORE_URL` is unset, letting callers
    /// fall back to an in-memory store for local runs.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("STOCKROOM_STORE_URL").ok()?;
        let collection = std::env::var("STOCKROOM_STORE_COLLECTION")
            .unwrap_or_else(|_| "inventory".to_string());
        let api_key = std::env::var("STOCKROOM_STORE_API_KEY").ok();
        Some(Self {
            base_url,
            collection,
            api_key,
        })
    }
}

/// Wire shape of a single stored document.
#[derive(Debug, Serialize, Deserialize)]
struct ItemDoc {
    quantity: u32,
}

/// Inventory store backed by the remote document collection.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: Client,
    config: StoreConfig,
}

impl RemoteStore {
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        // Validate the base URL once up front so later calls only see
        // transport failures.
        Url::parse(&config.base_url)
            .map_err(|e| StoreError::unavailable(format!("invalid store url: {e}")))?;
        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    fn collection_url(&self) -> StoreResult<Url> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| StoreError::unavailable(format!("invalid store url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::unavailable("store url cannot be a base"))?
            .pop_if_empty()
            .push("collections")
            .push(&self.config.collection);
        Ok(url)
    }

    fn document_url(&self, name: &str) -> StoreResult<Url> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|_| StoreError::unavailable("store url cannot be a base"))?
            .push(name);
        Ok(url)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => req.bearer_auth(key),
            None => req,
        }
    }
}

#[async_trait::async_trait]
impl InventoryStore for RemoteStore {
    async fn get(&self, name: &str) -> StoreResult<Option<u32>> {
        let url = self.document_url(name)?;
        let res = self
            .authorize(self.client.get(url))
            .send()
            .await
            .map_err(|e| StoreError::unavailable(e.to_string()))?;

        match res.status() {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => {
                let doc: ItemDoc = res
                    .json()
                    .await
                    .map_err(|e| StoreError::malformed(e.to_string()))?;
                Ok(Some(doc.quantity))
            }
            s => Err(StoreError::unavailable(format!(
                "get {name:?} returned status {s}"
            ))),
        }
    }

    async fn put(&self, name: &str, quantity: u32) -> StoreResult<()> {
        let url = self.document_url(name)?;
        let res = self
            .authorize(self.client.put(url))
            .json(&ItemDoc { quantity })
            .send()
            .await
            .map_err(|e| StoreError::unavailable(e.to_string()))?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(StoreError::unavailable(format!(
                "put {name:?} returned status {}",
                res.status()
            )))
        }
    }

    async fn delete(&self, name: &str) -> StoreResult<()> {
        let url = self.document_url(name)?;
        let res = self
            .authorize(self.client.delete(url))
            .send()
            .await
            .map_err(|e| StoreError::unavailable(e.to_string()))?;

        // Deleting an absent document is a no-op.
        if res.status().is_success() || res.status() == StatusCode::NOT_FOUND {
            Ok(())
        } else {
            Err(StoreError::unavailable(format!(
                "delete {name:?} returned status {}",
                res.status()
            )))
        }
    }

    async fn list(&self) -> StoreResult<Vec<InventoryItem>> {
        let url = self.collection_url()?;
        let res = self
            .authorize(self.client.get(url))
            .send()
            .await
            .map_err(|e| StoreError::unavailable(e.to_string()))?;

        if !res.status().is_success() {
            return Err(StoreError::unavailable(format!(
                "list returned status {}",
                res.status()
            )));
        }

        let docs: HashMap<String, ItemDoc> = res
            .json()
            .await
            .map_err(|e| StoreError::malformed(e.to_string()))?;

        Ok(docs
            .into_iter()
            .map(|(name, doc)| InventoryItem::new(name, doc.quantity))
            .collect())
    }
}
