//! Analytics Command
//!
//! Sends events through `window.gtag` when the page has loaded it.

use js_sys::{Function, Reflect};
use leptos::logging::warn;
use wasm_bindgen::{JsCast, JsValue};

use crate::analytics::{AnalyticsSink, SubmissionEvent};

/// Google Analytics `gtag("event", ...)` sink
#[derive(Debug, Clone, Copy, Default)]
pub struct GtagSink;

impl GtagSink {
    fn gtag() -> Option<Function> {
        let window = web_sys::window()?;
        Reflect::get(&window, &JsValue::from_str("gtag"))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }
}

impl AnalyticsSink for GtagSink {
    fn is_available(&self) -> bool {
        Self::gtag().is_some()
    }

    fn emit(&self, event_name: &str, event: &SubmissionEvent) {
        let Some(gtag) = Self::gtag() else {
            return;
        };
        let params = match serde_wasm_bindgen::to_value(event) {
            Ok(params) => params,
            Err(e) => {
                warn!("[Analytics] Could not serialize event: {}", e);
                return;
            }
        };
        if let Err(e) = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(event_name),
            &params,
        ) {
            warn!("[Analytics] gtag threw: {:?}", e);
        }
    }
}
