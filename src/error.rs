//! Error Types
//!
//! Validation errors are shown to the user verbatim, so their `Display`
//! output is the message text.

use thiserror::Error;

use crate::models::FocusTarget;

/// Submit-time validation failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Please enter a valid 5-digit ZIP code (e.g., 94103).")]
    InvalidZip,

    #[error("Please provide a valid price for each item.")]
    MissingPrice { row_id: u32 },

    #[error("Please add a description for each item.")]
    MissingDescription { row_id: u32 },

    #[error("Please enter at least one purchased item.")]
    NoItems,
}

impl FormError {
    /// Field to focus, if the error points at one
    pub fn focus(&self) -> Option<FocusTarget> {
        match self {
            FormError::InvalidZip => Some(FocusTarget::Zip),
            FormError::MissingPrice { row_id } => Some(FocusTarget::Price(*row_id)),
            FormError::MissingDescription { row_id } => Some(FocusTarget::Description(*row_id)),
            FormError::NoItems => None,
        }
    }
}

/// Failures of the "use my location" flow
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocateError {
    #[error("Location is not supported in this browser.")]
    Unsupported,

    #[error("Location permission was denied. Please enter your ZIP code manually.")]
    PermissionDenied,

    #[error("Could not determine your location. Please enter your ZIP code manually.")]
    PositionUnavailable,

    #[error("Could not look up your ZIP code right now. Please enter it manually.")]
    Lookup(String),

    #[error("Could not find a ZIP code for your location. Please enter it manually.")]
    NoPostalCode,
}

impl From<reqwest::Error> for LocateError {
    fn from(e: reqwest::Error) -> Self {
        LocateError::Lookup(e.to_string())
    }
}

pub type LocateResult<T> = Result<T, LocateError>;
