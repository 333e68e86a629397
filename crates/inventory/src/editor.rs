//! Modal editor state for the add/edit workflow.
//!
//! Three states: closed, adding a new item, or editing an existing one. The
//! edit state remembers the name the item had when the modal opened, since a
//! commit with a changed name is a rename. There is no validation-failure
//! state; field setters accept whatever they are given.

use stockroom_core::InventoryItem;

/// The name/quantity fields backing the modal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: u32,
}

impl Default for ItemDraft {
    /// A fresh draft: empty name, quantity 1.
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1,
        }
    }
}

/// The operation a committed editor asks the domain layer to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingCommit {
    Add {
        name: String,
        quantity: u32,
    },
    Update {
        original_name: String,
        new_name: String,
        quantity: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ItemEditor {
    #[default]
    Closed,
    Adding(ItemDraft),
    Editing {
        original_name: String,
        draft: ItemDraft,
    },
}

impl ItemEditor {
    /// Open the modal for a new item with cleared fields.
    pub fn open_for_new(&mut self) {
        *self = ItemEditor::Adding(ItemDraft::default());
    }

    /// Open the modal pre-filled from an existing item.
    pub fn open_for_edit(&mut self, item: &InventoryItem) {
        *self = ItemEditor::Editing {
            original_name: item.name.clone(),
            draft: ItemDraft {
                name: item.name.clone(),
                quantity: item.quantity,
            },
        };
    }

    /// Close the modal, discarding any draft.
    pub fn close(&mut self) {
        *self = ItemEditor::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ItemEditor::Closed)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            draft.name = name.into();
        }
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        if let Some(draft) = self.draft_mut() {
            draft.quantity = quantity;
        }
    }

    pub fn draft(&self) -> Option<&ItemDraft> {
        match self {
            ItemEditor::Closed => None,
            ItemEditor::Adding(draft) => Some(draft),
            ItemEditor::Editing { draft, .. } => Some(draft),
        }
    }

    fn draft_mut(&mut self) -> Option<&mut ItemDraft> {
        match self {
            ItemEditor::Closed => None,
            ItemEditor::Adding(draft) => Some(draft),
            ItemEditor::Editing { draft, .. } => Some(draft),
        }
    }

    /// Take the pending operation and close the modal.
    ///
    /// Returns `None` when the modal is not open.
    pub fn commit(&mut self) -> Option<PendingCommit> {
        match std::mem::take(self) {
            ItemEditor::Closed => None,
            ItemEditor::Adding(draft) => Some(PendingCommit::Add {
                name: draft.name,
                quantity: draft.quantity,
            }),
            ItemEditor::Editing {
                original_name,
                draft,
            } => Some(PendingCommit::Update {
                original_name,
                new_name: draft.name,
                quantity: draft.quantity,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_for_new_clears_fields() {
        let mut editor = ItemEditor::default();
        editor.open_for_new();
        assert_eq!(
            editor.draft(),
            Some(&ItemDraft {
                name: String::new(),
                quantity: 1
            })
        );
    }

    #[test]
    fn open_for_edit_prefills_and_remembers_original_name() {
        let mut editor = ItemEditor::default();
        editor.open_for_edit(&InventoryItem::new("milk", 4));
        editor.set_name("oat-milk");
        editor.set_quantity(3);

        assert_eq!(
            editor.commit(),
            Some(PendingCommit::Update {
                original_name: "milk".to_string(),
                new_name: "oat-milk".to_string(),
                quantity: 3,
            })
        );
        assert!(!editor.is_open());
    }

    #[test]
    fn commit_in_add_mode_yields_add() {
        let mut editor = ItemEditor::default();
        editor.open_for_new();
        editor.set_name("flour");
        editor.set_quantity(2);

        assert_eq!(
            editor.commit(),
            Some(PendingCommit::Add {
                name: "flour".to_string(),
                quantity: 2,
            })
        );
    }

    #[test]
    fn commit_when_closed_is_none() {
        let mut editor = ItemEditor::default();
        assert_eq!(editor.commit(), None);
    }

    #[test]
    fn close_discards_the_draft() {
        let mut editor = ItemEditor::default();
        editor.open_for_edit(&InventoryItem::new("milk", 4));
        editor.close();
        assert_eq!(editor, ItemEditor::Closed);
        assert_eq!(editor.draft(), None);
    }

    #[test]
    fn setters_are_noops_when_closed() {
        let mut editor = ItemEditor::default();
        editor.set_name("ghost");
        editor.set_quantity(9);
        assert_eq!(editor, ItemEditor::Closed);
    }
}
