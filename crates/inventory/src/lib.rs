//! Inventory domain module.
//!
//! Business rules for the stock collection: how quantities merge on add, how
//! renames behave, when a record is deleted instead of written, and how the
//! in-memory view is filtered. The store itself is an external collaborator
//! reached through [`stockroom_store::InventoryStore`].

pub mod editor;
pub mod ops;
pub mod search;
pub mod tracker;

pub use editor::{ItemDraft, ItemEditor, PendingCommit};
pub use search::filter_items;
pub use tracker::Tracker;
