//! UI Components
//!
//! Leptos components rendering the form store.

mod contribution_form;
mod form_message;
mod item_editor;
mod item_row;
mod location_button;

pub use contribution_form::ContributionForm;
pub use form_message::FormMessageView;
pub use item_editor::ItemEditorView;
pub use item_row::ItemRowView;
pub use location_button::LocationButton;
