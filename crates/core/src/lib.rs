//! `stockroom-core` — shared domain primitives.
//!
//! This crate contains the item model and the error taxonomy shared by the
//! store adapters, the domain operations, and the recipe helper. No IO.

pub mod error;
pub mod item;

pub use error::{CompletionError, StoreError, StoreResult};
pub use item::InventoryItem;
