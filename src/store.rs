//! Form State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::editor::{ItemEditor, RowEdit};
use crate::locate::LocateTask;
use crate::models::FormMessage;

/// Everything the form shows, in one place
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    pub zip: String,
    pub currency: String,
    /// Optional store name
    pub store_name: String,
    pub editor: ItemEditor,
    /// Status line, overwritten by every action
    pub message: Option<FormMessage>,
    pub locate: LocateTask,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the plain input fields
    pub fn clear_fields(&mut self) {
        self.zip.clear();
        self.currency.clear();
        self.store_name.clear();
    }
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// Get the form store from context
pub fn use_form_store() -> FormStore {
    expect_context::<FormStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a row and return its id
pub fn store_add_row(store: &FormStore) -> u32 {
    store.editor().write().add_row()
}

/// Remove a row (or clear it when it is the last one)
pub fn store_remove_row(store: &FormStore, row_id: u32) {
    store.editor().write().remove_row(row_id);
}

/// Apply a field edit to one row
pub fn store_update_row(store: &FormStore, row_id: u32, edit: RowEdit) {
    store.editor().write().update_row(row_id, edit);
}
