//! Application Context
//!
//! Shared, non-reactive app services provided via Leptos Context API.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::AppConfig;
use crate::models::FocusTarget;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Configuration loaded at startup
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config: StoredValue::new(config) }
    }

    pub fn analytics_event(&self) -> String {
        self.config.with_value(|c| c.analytics_event.clone())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Focus a rendered field on the next frame, after pending view updates
pub fn focus_field(target: FocusTarget) {
    request_animation_frame(move || {
        let Some(element) = document().get_element_by_id(&target.element_id()) else {
            return;
        };
        if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = element.focus();
        }
    });
}
