//! Geolocation Command
//!
//! Wraps `navigator.geolocation.getCurrentPosition` in a future.

use js_sys::{Promise, Reflect};
use leptos::logging::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::PositionOptions;

use crate::config::AppConfig;
use crate::error::{LocateError, LocateResult};
use crate::locate::position_error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

fn get_f64(target: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(target, &JsValue::from_str(key)).ok()?.as_f64()
}

fn read_coordinates(position: &JsValue) -> Option<Coordinates> {
    let coords = Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    Some(Coordinates {
        latitude: get_f64(&coords, "latitude")?,
        longitude: get_f64(&coords, "longitude")?,
    })
}

/// Coarse current position, honoring the configured timeout and cache age
pub async fn current_position(config: &AppConfig) -> LocateResult<Coordinates> {
    let window = web_sys::window().ok_or(LocateError::Unsupported)?;
    let navigator = window.navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false) {
        return Err(LocateError::Unsupported);
    }
    let geolocation = navigator.geolocation().map_err(|_| LocateError::Unsupported)?;

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(false);
    options.set_timeout(config.position_timeout_ms);
    options.set_maximum_age(config.position_max_age_ms);

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
            &resolve,
            Some(&reject),
            &options,
        ) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    match JsFuture::from(promise).await {
        Ok(position) => read_coordinates(&position).ok_or(LocateError::PositionUnavailable),
        Err(e) => {
            let code = get_f64(&e, "code").map(|c| c as u16);
            warn!("[Locate] getCurrentPosition failed, code={:?}", code);
            Err(position_error(code))
        }
    }
}
