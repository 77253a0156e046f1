//! App Configuration
//!
//! Defaults can be overridden by a `window.PRICE_FORM_CONFIG` object set by
//! the hosting page before the WASM bundle loads.

use leptos::logging::warn;
use serde::Deserialize;
use wasm_bindgen::JsValue;

pub const CONFIG_GLOBAL: &str = "PRICE_FORM_CONFIG";
pub const CURRENCY_PLACEHOLDER: &str = "Select currency";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Reverse geocoding endpoint (Nominatim-compatible)
    pub geocoder_url: String,
    pub position_timeout_ms: u32,
    /// How old a cached position may be
    pub position_max_age_ms: u32,
    pub lookup_timeout_ms: u32,
    pub analytics_event: String,
    pub currencies: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            geocoder_url: "https://nominatim.openstreetmap.org/reverse".to_string(),
            position_timeout_ms: 10_000,
            position_max_age_ms: 5 * 60 * 1000,
            lookup_timeout_ms: 10_000,
            analytics_event: "price_submission".to_string(),
            currencies: ["USD", "CAD", "EUR", "GBP"].iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// `(value, label)` pairs for the currency select, placeholder first
    pub fn currency_options(&self) -> Vec<(String, String)> {
        std::iter::once((String::new(), CURRENCY_PLACEHOLDER.to_string()))
            .chain(self.currencies.iter().map(|code| (code.clone(), code.clone())))
            .collect()
    }

    /// Read overrides from the page, falling back to defaults
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value::<AppConfig>(raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("[Config] Ignoring malformed {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }
}
