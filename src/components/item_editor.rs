//! Item Editor Component
//!
//! Renders the row list keyed by row id, plus the "add item" control.

use leptos::prelude::*;

use crate::components::ItemRowView;
use crate::context::focus_field;
use crate::models::FocusTarget;
use crate::store::{store_add_row, use_form_store, FormStateStoreFields};

#[component]
pub fn ItemEditorView() -> impl IntoView {
    let store = use_form_store();

    let row_ids = move || {
        store
            .editor()
            .read()
            .rows()
            .iter()
            .map(|row| row.id)
            .collect::<Vec<_>>()
    };

    let on_add = move |_| {
        let id = store_add_row(&store);
        focus_field(FocusTarget::Description(id));
    };

    view! {
        <fieldset class="item-editor">
            <legend>"Items purchased"</legend>
            <div class="item-rows">
                <For
                    each=row_ids
                    key=|id| *id
                    children=move |id| view! { <ItemRowView row_id=id /> }
                />
            </div>
            <button type="button" class="add-item-btn" on:click=on_add>
                "+ Add another item"
            </button>
        </fieldset>
    }
}
