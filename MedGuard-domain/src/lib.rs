// MedGuard Domain
// This crate contains the business logic for the MedGuard application

// Runtime configuration read from the environment
pub mod config;

// Domain entities
pub mod entities;

// Services that implement business logic
pub mod services;

// Health checks and system status
pub mod health;

// Flattening of validator errors into user-facing messages
pub mod validation;

// Re-export the data crate for callers wiring external sources
pub use med_guard_data as data;

// Testing utilities - only available with mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;
