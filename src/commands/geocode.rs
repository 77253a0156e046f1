//! Reverse Geocoding Command
//!
//! Looks up the postal code for a coordinate pair.

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use leptos::logging::error;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::{LocateError, LocateResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub postalcode: Option<String>,
}

impl ReverseGeocodeResponse {
    /// `address.postcode`, falling back to `address.postalcode`
    pub fn postal_code(&self) -> Option<&str> {
        let address = self.address.as_ref()?;
        address
            .postcode
            .as_deref()
            .or(address.postalcode.as_deref())
            .filter(|code| !code.trim().is_empty())
    }
}

async fn fetch_reverse(config: &AppConfig, latitude: f64, longitude: f64) -> LocateResult<ReverseGeocodeResponse> {
    let lat = latitude.to_string();
    let lon = longitude.to_string();
    let response = reqwest::Client::new()
        .get(&config.geocoder_url)
        .query(&[
            ("format", "jsonv2"),
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("addressdetails", "1"),
        ])
        .header("Accept", "application/json")
        .send()
        .await?
        .error_for_status()?;
    Ok(response.json::<ReverseGeocodeResponse>().await?)
}

/// Postal code for the given position. The request is abandoned after the
/// configured lookup timeout.
pub async fn reverse_geocode(config: &AppConfig, latitude: f64, longitude: f64) -> LocateResult<String> {
    let request = Box::pin(fetch_reverse(config, latitude, longitude));
    let timeout = Box::pin(TimeoutFuture::new(config.lookup_timeout_ms));

    let response = match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(LocateError::Lookup(format!(
            "timed out after {} ms",
            config.lookup_timeout_ms
        ))),
    }
    .inspect_err(|e| error!("[Locate] Reverse geocode failed: {:?}", e))?;

    response
        .postal_code()
        .map(str::to_string)
        .ok_or(LocateError::NoPostalCode)
}
