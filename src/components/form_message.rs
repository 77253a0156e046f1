//! Form Message Component

use leptos::prelude::*;

use crate::store::{use_form_store, FormStateStoreFields};

/// Status line under the form; styled by message kind
#[component]
pub fn FormMessageView() -> impl IntoView {
    let store = use_form_store();

    let class = move || match store.message().get() {
        Some(message) => format!("form-message {}", message.kind.css_class()),
        None => "form-message".to_string(),
    };
    let text = move || store.message().get().map(|message| message.text).unwrap_or_default();

    view! {
        <p id="form-message" class=class>{text}</p>
    }
}
