//! Contribution Form Component
//!
//! ZIP, currency, store and the item editor. Submission never leaves the
//! page: the submit controller validates, reports and resets.

use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::commands::GtagSink;
use crate::components::{FormMessageView, ItemEditorView, LocationButton};
use crate::context::{focus_field, use_app_context};
use crate::store::{use_form_store, FormStateStoreFields};
use crate::submit::{self, SubmitOutcome};

#[component]
pub fn ContributionForm() -> impl IntoView {
    let store = use_form_store();
    let ctx = use_app_context();
    let currencies = ctx.config.with_value(|c| c.currency_options());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let event_name = ctx.analytics_event();
        let outcome = submit::handle_submit(&mut store.write(), &GtagSink, &event_name);

        match outcome {
            SubmitOutcome::Accepted { tracked, .. } => {
                if !tracked {
                    log!("[Analytics] gtag not present, event skipped");
                }
            }
            SubmitOutcome::Rejected { error, focus } => {
                warn!("[Submit] Rejected: {}", error);
                if let Some(target) = focus {
                    focus_field(target);
                }
            }
        }
    };

    view! {
        <form id="contribution-form" class="contribution-form" novalidate=true on:submit=on_submit>
            <div class="form-row">
                <label for="zip">"ZIP code"</label>
                <input
                    type="text"
                    id="zip"
                    name="zip"
                    inputmode="numeric"
                    autocomplete="postal-code"
                    placeholder="e.g., 94103"
                    prop:value=move || store.zip().get()
                    on:input=move |ev| store.zip().set(event_target_value(&ev))
                />
                <LocationButton />
            </div>

            <div class="form-row">
                <label for="currency">"Currency"</label>
                <select
                    id="currency"
                    name="currency"
                    prop:value=move || store.currency().get()
                    on:change=move |ev| store.currency().set(event_target_value(&ev))
                >
                    {currencies.into_iter().map(|(value, label)| view! {
                        <option value=value>{label}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="form-row">
                <label for="store">"Store (optional)"</label>
                <input
                    type="text"
                    id="store"
                    name="store"
                    placeholder="e.g., Corner Market"
                    prop:value=move || store.store_name().get()
                    on:input=move |ev| store.store_name().set(event_target_value(&ev))
                />
            </div>

            <ItemEditorView />

            <button type="submit" class="submit-btn">"Submit prices"</button>

            <FormMessageView />
        </form>
    }
}
