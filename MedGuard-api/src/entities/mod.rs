// Public entities for the MedGuard API
// Request and response shapes that only exist at the HTTP boundary

// Error responses and query parameters
pub mod common;
