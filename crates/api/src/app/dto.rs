use axum::http::StatusCode;
use serde::Deserialize;

use stockroom_core::InventoryItem;

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// Body for add and update: the modal's name/quantity fields.
///
/// Typing `quantity` as an unsigned integer makes non-numeric or negative
/// input a 4xx at the boundary; nothing un-number-like ever reaches the
/// store.
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub quantity: u32,
}

impl ItemPayload {
    /// Boundary validation: a stored record needs a non-empty name and a
    /// quantity of at least 1 (`put` never deletes, so zero is not
    /// storable).
    pub fn validate(&self) -> Result<(), axum::response::Response> {
        if self.name.trim().is_empty() {
            return Err(errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_name",
                "name must not be empty",
            ));
        }
        if self.quantity == 0 {
            return Err(errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_quantity",
                "quantity must be at least 1",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

// -------------------------
// Response mapping
// -------------------------

pub fn items_to_json(items: &[InventoryItem]) -> serde_json::Value {
    serde_json::json!({ "items": items })
}
