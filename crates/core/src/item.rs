use serde::{Deserialize, Serialize};

/// A single stock record: a unique, case-sensitive name and how many are held.
///
/// The collection is a mapping from `name` to `quantity`. A stored record
/// always holds `quantity >= 1`; driving a quantity to zero deletes the
/// record instead of persisting it at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub quantity: u32,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}
