//! Location Button Component
//!
//! "Use my location" control that fills the ZIP field. Disabled while its
//! request is in flight.

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::locate::{self, LocateState};
use crate::store::{use_form_store, FormStateStoreFields};

#[component]
pub fn LocationButton() -> impl IntoView {
    let store = use_form_store();
    let ctx = use_app_context();

    let busy = move || store.locate().read().is_busy();
    let label = move || store.locate().read().button_label();

    let on_click = move |_| {
        let Some(generation) = store.locate().write().begin() else {
            return;
        };
        let config = ctx.config.get_value();

        spawn_local(async move {
            let result = locate::locate_zip(&config).await;
            if let Err(e) = &result {
                warn!("[Locate] {:?}", e);
            }

            let mut guard = store.write();
            let state = &mut *guard;
            if !state.locate.finish(generation, result) {
                log!("[Locate] Dropping result of cancelled request #{}", generation);
                return;
            }
            if let LocateState::Succeeded(zip) = state.locate.state() {
                state.zip = zip.clone();
            }
            state.message = state.locate.message();
        });
    };

    view! {
        <span class="location-control">
            <button
                type="button"
                class="location-btn"
                prop:disabled=busy
                on:click=on_click
            >
                {label}
            </button>
            <Show when=busy>
                <button
                    type="button"
                    class="location-cancel-btn"
                    on:click=move |_| store.locate().write().cancel()
                >
                    "Cancel"
                </button>
            </Show>
        </span>
    }
}
