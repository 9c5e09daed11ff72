use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::debug;

use med_guard_domain::services::scanner::MAX_IMAGE_BYTES;

use crate::api::handlers::{
    auth, bmi, diseases, drugs, health, metrics, navigation, pills, reminders, scans,
};
use crate::api::state::AppState;
use crate::openapi::configure_swagger_routes;

/// Body limit on upload routes, above the scanner's own size rule
pub const UPLOAD_BODY_LIMIT: usize = 2 * MAX_IMAGE_BYTES;

/// Create the application router
pub fn create_app(state: AppState) -> Router {
    debug!("Creating application router");

    let upload_routes = Router::new()
        .route("/pills/analyze", post(pills::analyze_pill_image))
        .route("/scans", post(scans::scan_image))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT));

    // Define specific routes before parametrized routes to avoid conflicts
    let api_routes = Router::new()
        .route("/navigation", get(navigation::list_screens))
        .route("/auth/login", post(auth::login))
        .route("/metrics/validate", post(metrics::validate_metrics))
        .route("/metrics", post(metrics::submit_metrics))
        .route("/bmi", post(bmi::calculate))
        .route(
            "/reminders",
            get(reminders::list_reminders).post(reminders::add_reminder),
        )
        .route("/reminders/:id", delete(reminders::delete_reminder))
        .route("/drugs/search", get(drugs::search_drugs))
        .route("/diseases/search", get(diseases::search_diseases))
        .route("/pills/identify", post(pills::identify_pill))
        .route(
            "/scans/latest",
            get(scans::latest_scan).delete(scans::clear_scan),
        )
        .route("/scans/history", get(scans::scan_history))
        .route("/scans/actions/:action", post(scans::scan_action))
        .merge(upload_routes);

    debug!("API routes configured");

    let app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .with_state(state);

    // Configure the Swagger UI using the helper function
    let app = app.merge(configure_swagger_routes());
    debug!("Swagger UI merged");

    health::initialize_server_start_time();

    configure_layers(app)
}

/// CORS, request tracing and security headers
fn configure_layers(app: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    let security_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    app.layer(cors)
        .layer(security_headers)
        .layer(TraceLayer::new_for_http())
}
