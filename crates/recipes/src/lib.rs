//! `stockroom-recipes`
//!
//! **Responsibility:** the recipe-suggestion convenience feature.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It never mutates inventory state.
//! - It returns raw text from the completion service, unparsed and
//!   unstructured, or a fixed fallback string on any failure.

pub mod client;
pub mod prompt;

pub use client::{CompletionClient, HttpCompletionClient};
pub use prompt::recipe_prompt;

use stockroom_core::InventoryItem;

/// Shown when the completion call fails for any reason.
pub const FAILURE_FALLBACK: &str = "Failed to fetch response";

/// Shown when the service answers successfully but with empty text.
pub const EMPTY_ANSWER_FALLBACK: &str = "No answer found";

/// Ask the completion service for recipe names built from the current items.
///
/// Failures are degraded to [`FAILURE_FALLBACK`] here; this function never
/// returns an error. There is no retry and no parsing of the answer.
pub async fn suggest_recipes<C>(client: &C, items: &[InventoryItem]) -> String
where
    C: CompletionClient + ?Sized,
{
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    let query = recipe_prompt(&names);

    match client.ask(&query).await {
        Ok(answer) if answer.is_empty() => EMPTY_ANSWER_FALLBACK.to_string(),
        Ok(answer) => answer,
        Err(err) => {
            tracing::warn!(error = %err, "recipe suggestion failed");
            FAILURE_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::CompletionError;

    struct FixedClient(Result<String, CompletionError>);

    #[async_trait::async_trait]
    impl CompletionClient for FixedClient {
        async fn ask(&self, _query: &str) -> Result<String, CompletionError> {
            self.0.clone()
        }
    }

    fn pantry() -> Vec<InventoryItem> {
        vec![
            InventoryItem::new("eggs", 12),
            InventoryItem::new("milk", 1),
        ]
    }

    #[tokio::test]
    async fn returns_the_raw_answer() {
        let client = FixedClient(Ok("Omelette, custard".to_string()));
        assert_eq!(suggest_recipes(&client, &pantry()).await, "Omelette, custard");
    }

    #[tokio::test]
    async fn empty_answer_degrades_to_fallback() {
        let client = FixedClient(Ok(String::new()));
        assert_eq!(
            suggest_recipes(&client, &pantry()).await,
            EMPTY_ANSWER_FALLBACK
        );
    }

    #[tokio::test]
    async fn failure_degrades_to_fallback() {
        let client = FixedClient(Err(CompletionError::Status(500)));
        assert_eq!(suggest_recipes(&client, &pantry()).await, FAILURE_FALLBACK);
    }
}
