use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Navigation and login
        crate::api::handlers::navigation::list_screens,
        crate::api::handlers::auth::login,

        // Health tools
        crate::api::handlers::metrics::validate_metrics,
        crate::api::handlers::metrics::submit_metrics,
        crate::api::handlers::bmi::calculate,
        crate::api::handlers::reminders::list_reminders,
        crate::api::handlers::reminders::add_reminder,
        crate::api::handlers::reminders::delete_reminder,

        // Medicine tools
        crate::api::handlers::drugs::search_drugs,
        crate::api::handlers::diseases::search_diseases,
        crate::api::handlers::pills::identify_pill,
        crate::api::handlers::pills::analyze_pill_image,

        // Counterfeit scanner
        crate::api::handlers::scans::scan_image,
        crate::api::handlers::scans::latest_scan,
        crate::api::handlers::scans::clear_scan,
        crate::api::handlers::scans::scan_action,
        crate::api::handlers::scans::scan_history
    ),
    components(
        schemas(
            // API entities
            crate::entities::common::ErrorResponse,
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentHealthStatus,
            crate::api::handlers::metrics::MetricsValidationResponse,
            crate::api::handlers::reminders::ReminderUpdate,

            // Shared
            med_guard_domain::entities::notice::Notice,
            med_guard_domain::entities::notice::NoticeVariant,
            med_guard_domain::entities::navigation::Screen,
            med_guard_domain::entities::navigation::ScreenLink,
            med_guard_domain::entities::auth::LoginRequest,
            med_guard_domain::entities::auth::LoginOutcome,

            // Metrics and BMI
            med_guard_domain::entities::metrics::HealthMetricsReading,
            med_guard_domain::entities::metrics::BloodPressureReading,
            med_guard_domain::entities::metrics::CholesterolReading,
            med_guard_domain::entities::metrics::MetricField,
            med_guard_domain::entities::metrics::MetricRange,
            med_guard_domain::entities::metrics::Violation,
            med_guard_domain::entities::metrics::MetricStatus,
            med_guard_domain::entities::metrics::HealthStatus,
            med_guard_domain::entities::metrics::MetricsSubmission,
            med_guard_domain::entities::bmi::BmiRequest,
            med_guard_domain::entities::bmi::BmiCategory,
            med_guard_domain::entities::bmi::BmiResult,

            // Reminders
            med_guard_domain::entities::reminder::Frequency,
            med_guard_domain::entities::reminder::ReminderDraft,
            med_guard_domain::entities::reminder::Reminder,
            med_guard_domain::entities::reminder::ReminderBookView,

            // Searches and pills
            med_guard_domain::entities::drug::Drug,
            med_guard_domain::entities::drug::DrugSearchOrigin,
            med_guard_domain::entities::drug::DrugSearchOutcome,
            med_guard_domain::entities::disease::DiseaseSummary,
            med_guard_domain::entities::disease::DiseaseLookupOutcome,
            med_guard_domain::entities::pill::PillShape,
            med_guard_domain::entities::pill::PillSearchCriteria,
            med_guard_domain::entities::pill::PillMatch,
            med_guard_domain::entities::pill::PillSearchOutcome,
            med_guard_domain::entities::pill::PillImageAnalysis,

            // Scanner
            med_guard_domain::entities::scan::ScanDetails,
            med_guard_domain::entities::scan::ScanResult,
            med_guard_domain::entities::scan::ScanOutcome,
            med_guard_domain::entities::scan::ScanAction,
            med_guard_domain::entities::scan::ScanHistoryEntry
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "navigation", description = "Screen list"),
        (name = "auth", description = "Simulated login"),
        (name = "metrics", description = "Health metrics validation and advisory status"),
        (name = "bmi", description = "Body mass index"),
        (name = "reminders", description = "Pill reminders"),
        (name = "search", description = "Drug and disease search"),
        (name = "pills", description = "Pill identifier"),
        (name = "scanner", description = "Counterfeit medicine scanner")
    ),
    info(
        title = "MedGuard API",
        version = "0.1.0",
        description = "Medicine safety and personal health utilities",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_generation() {
        let openapi = ApiDoc::openapi();

        assert_eq!(openapi.info.title, "MedGuard API");
        assert_eq!(openapi.info.version, "0.1.0");

        let tags = openapi.tags.as_ref().unwrap();
        assert!(tags.iter().any(|tag| tag.name == "scanner"));
        assert!(tags.iter().any(|tag| tag.name == "metrics"));

        let paths = &openapi.paths.paths;
        for path in [
            "/health",
            "/api/v1/navigation",
            "/api/v1/metrics",
            "/api/v1/reminders/{id}",
            "/api/v1/drugs/search",
            "/api/v1/scans/actions/{action}",
        ] {
            assert!(paths.contains_key(path), "missing path {}", path);
        }
    }
}
