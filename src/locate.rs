//! Location Autofill
//!
//! Geolocation + reverse geocoding as a single async task. The task state
//! drives the button: it is disabled exactly while a request is in flight.

use crate::commands::{self, Coordinates};
use crate::config::AppConfig;
use crate::error::{LocateError, LocateResult};
use crate::models::FormMessage;
use crate::validation::extract_zip;

pub const IDLE_LABEL: &str = "Use my location";
pub const BUSY_LABEL: &str = "Locating…";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocateState {
    #[default]
    Idle,
    InFlight,
    Succeeded(String),
    Failed(LocateError),
}

/// Tracks the one in-flight locate request.
///
/// Every `begin` hands out a new generation; results carrying an older
/// generation are dropped, which is how cancellation works.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocateTask {
    state: LocateState,
    generation: u64,
}

impl LocateTask {
    pub fn state(&self) -> &LocateState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == LocateState::InFlight
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_busy() { BUSY_LABEL } else { IDLE_LABEL }
    }

    /// Start a request. `None` while another one is still in flight.
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_busy() {
            return None;
        }
        self.generation += 1;
        self.state = LocateState::InFlight;
        Some(self.generation)
    }

    /// Record a result. Returns false if the request was cancelled or superseded.
    pub fn finish(&mut self, generation: u64, result: LocateResult<String>) -> bool {
        if generation != self.generation || !self.is_busy() {
            return false;
        }
        self.state = match result {
            Ok(zip) => LocateState::Succeeded(zip),
            Err(e) => LocateState::Failed(e),
        };
        true
    }

    /// Abandon the in-flight request, if any
    pub fn cancel(&mut self) {
        if self.is_busy() {
            self.generation += 1;
            self.state = LocateState::Idle;
        }
    }

    /// Status line for the current state
    pub fn message(&self) -> Option<FormMessage> {
        match &self.state {
            LocateState::Succeeded(zip) => {
                Some(FormMessage::success(format!("ZIP code filled from your location: {}", zip)))
            }
            LocateState::Failed(e) => Some(FormMessage::error(e.to_string())),
            LocateState::Idle | LocateState::InFlight => None,
        }
    }
}

/// Map a `GeolocationPositionError.code` to an error
pub fn position_error(code: Option<u16>) -> LocateError {
    match code {
        Some(1) => LocateError::PermissionDenied,
        _ => LocateError::PositionUnavailable,
    }
}

/// Resolve the user's ZIP code from the browser position
pub async fn locate_zip(config: &AppConfig) -> LocateResult<String> {
    let Coordinates { latitude, longitude } = commands::current_position(config).await?;
    let postal_code = commands::reverse_geocode(config, latitude, longitude).await?;
    extract_zip(&postal_code).ok_or(LocateError::NoPostalCode)
}
