//! Item Row Component
//!
//! One line of the item editor: description, price, sale status, note and a
//! remove control.

use leptos::prelude::*;

use crate::editor::RowEdit;
use crate::models::{description_input_id, price_input_id, ItemRow, SaleStatus, SALE_STATUSES};
use crate::store::{store_remove_row, store_update_row, use_form_store, FormStateStoreFields};

#[component]
pub fn ItemRowView(row_id: u32) -> impl IntoView {
    let store = use_form_store();

    // Reactive read of one field of this row
    let field = move |get: fn(&ItemRow) -> String| {
        move || store.editor().read().row(row_id).map(get).unwrap_or_default()
    };
    let sale_status = move || {
        store
            .editor()
            .read()
            .row(row_id)
            .map(|row| row.sale_status)
            .unwrap_or_default()
    };

    view! {
        <div class="item-row" data-row-id=row_id.to_string()>
            <input
                type="text"
                id=description_input_id(row_id)
                class="item-description"
                placeholder="Item (e.g., eggs, 1 dozen)"
                prop:value=field(|row| row.description.clone())
                on:input=move |ev| {
                    store_update_row(&store, row_id, RowEdit::Description(event_target_value(&ev)));
                }
            />
            <input
                type="number"
                id=price_input_id(row_id)
                class="item-price"
                placeholder="Price"
                min="0"
                step="0.01"
                inputmode="decimal"
                prop:value=field(|row| row.price.clone())
                on:input=move |ev| {
                    store_update_row(&store, row_id, RowEdit::Price(event_target_value(&ev)));
                }
            />
            <select
                class="item-sale-status"
                prop:value=move || sale_status().as_str()
                on:change=move |ev| {
                    let status = SaleStatus::from_str(&event_target_value(&ev));
                    store_update_row(&store, row_id, RowEdit::SaleStatus(status));
                }
            >
                {SALE_STATUSES.iter().map(|status| view! {
                    <option value=status.as_str()>{status.label()}</option>
                }).collect_view()}
            </select>
            <input
                type="text"
                class="item-note"
                placeholder="Note (optional)"
                prop:value=field(|row| row.note.clone())
                on:input=move |ev| {
                    store_update_row(&store, row_id, RowEdit::Note(event_target_value(&ev)));
                }
            />
            <button
                type="button"
                class="remove-item-btn"
                title="Remove item"
                on:click=move |_| store_remove_row(&store, row_id)
            >
                "×"
            </button>
        </div>
    }
}
