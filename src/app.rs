//! Price Form App
//!
//! Root component: loads config, provides the store and context.

use leptos::logging::log;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::ContributionForm;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::FormState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log!("[APP] Geocoder: {}, currencies: {:?}", config.geocoder_url, config.currencies);

    // Provide context to all children
    provide_context(Store::new(FormState::new()));
    provide_context(AppContext::new(config));

    view! {
        <main class="main-content">
            <h1>"Contribute prices"</h1>
            <p class="intro">
                "Tell us what you paid for everyday items. Your report helps track local prices."
            </p>
            <ContributionForm />
        </main>
    }
}
