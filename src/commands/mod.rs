//! Browser Command Wrappers
//!
//! Bindings to the browser and network services the form talks to,
//! organized by service.

mod analytics;
mod geocode;
mod geolocation;

// Re-export all public items
pub use analytics::*;
pub use geocode::*;
pub use geolocation::*;
