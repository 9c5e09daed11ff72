use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use med_guard_api::{create_app, AppState};
use med_guard_domain::config::AppConfig;
use med_guard_domain::testing::{FixedOracle, StaticDrugLabelSource, StaticEncyclopedia};

// Initialize tracing once for all tests
static INIT: std::sync::Once = std::sync::Once::new();
fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info")
            .with_test_writer()
            .try_init();
    });
}

fn test_app(state: AppState) -> Router {
    create_app(state)
}

fn test_state() -> AppState {
    AppState::new(
        AppConfig::for_tests(),
        Arc::new(StaticDrugLabelSource::empty()),
        Arc::new(StaticEncyclopedia::empty()),
        Arc::new(FixedOracle::counterfeit()),
    )
}

// Helper function to get body bytes from a response
async fn get_body_bytes(response: axum::response::Response) -> Vec<u8> {
    let body = response.into_body();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    bytes.to_vec()
}

#[tokio::test]
async fn test_app_creation_and_health_check() {
    initialize();

    let response = test_app(test_state())
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );

    let body = get_body_bytes(response).await;
    let health: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(health["status"], "ok");
    assert!(health["version"].is_string());
    assert_eq!(health["components"]["drug_catalog"]["status"], "ok");
}

#[tokio::test]
async fn test_openapi_documentation_available() {
    initialize();

    let response = test_app(test_state())
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = get_body_bytes(response).await;
    let doc: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(doc["info"]["title"], "MedGuard API");
    assert!(doc["paths"]["/api/v1/scans"].is_object());
    assert!(doc["paths"]["/api/v1/drugs/search"].is_object());
}

#[tokio::test]
async fn test_metrics_round_trip() {
    initialize();
    let app = test_app(test_state());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/metrics")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"blood_pressure": {"systolic": "150", "diastolic": "85"}}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&get_body_bytes(response).await).unwrap();
    assert_eq!(body["status"]["blood_pressure"], "high");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/metrics")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({"pulse_rate": 250}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&get_body_bytes(response).await).unwrap();
    assert_eq!(body["notices"][0]["title"], "Validation Error");
}

#[tokio::test]
async fn test_counterfeit_scan_then_report() {
    initialize();
    let state = test_state();

    let response = test_app(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/scans")
                .header(header::CONTENT_TYPE, "image/jpeg")
                .body(Body::from(vec![0xff, 0xd8, 0xff, 0xe0]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&get_body_bytes(response).await).unwrap();
    assert_eq!(body["result"]["authentic"], false);

    let response = test_app(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/scans/actions/report")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let notice: Value = serde_json::from_slice(&get_body_bytes(response).await).unwrap();
    assert_eq!(notice["title"], "Report Submitted");
}
