// Domain services
// Each screen has its own service; stateful screens keep their state
// behind a lock inside the service.

pub mod auth;
pub mod authenticity;
pub mod bmi;
pub mod disease_search;
pub mod drug_search;
pub mod metrics;
pub mod pill_identifier;
pub mod reminders;
pub mod scanner;
pub mod search;

// Re-export service traits, errors and default implementations
pub use auth::{login, LoginError};
pub use authenticity::{AuthenticityOracle, RandomOracle};
pub use bmi::{calculate_bmi, BmiError};
pub use disease_search::{DiseaseSearchService, DiseaseSearchServiceTrait};
pub use drug_search::{DrugSearchService, DrugSearchServiceTrait};
pub use metrics::{derive_status, validate, MetricsError, MetricsService, MetricsServiceTrait};
pub use pill_identifier::{
    PillError, PillIdentifierService, PillIdentifierServiceTrait, PillImageAnalyzer,
    SimulatedPillAnalyzer,
};
pub use reminders::{ReminderAction, ReminderBook, ReminderService, ReminderServiceTrait};
pub use scanner::{
    validate_image, ScanError, ScannerAction, ScannerService, ScannerServiceTrait, ScannerSession,
};
pub use search::SearchError;
