pub mod auth;
pub mod bmi;
pub mod diseases;
pub mod drugs;
pub mod health;
pub mod metrics;
pub mod navigation;
pub mod pills;
pub mod reminders;
pub mod scans;

// Tests module
#[cfg(test)]
mod tests;

use axum::http::{header, HeaderMap};

// Re-export handlers for easier imports
pub use health::health_check;

/// Content type of a raw upload, empty when the header is missing
pub(crate) fn content_type(headers: &HeaderMap) -> String {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
