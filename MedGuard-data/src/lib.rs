// MedGuard Data
// This crate holds the static catalogues and the clients for external services

// Built-in reference data (local drug table, pill catalogue, scan history)
pub mod catalog;

// Outbound clients for the public drug-label and encyclopedia APIs
pub mod external;

// Data storage models
pub mod models;
