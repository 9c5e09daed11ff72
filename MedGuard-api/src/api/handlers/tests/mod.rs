// Router-level handler tests
// Every test builds the full router over static sources and a fixed oracle.

mod metrics_test;
mod tools_test;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use med_guard_domain::config::AppConfig;
use med_guard_domain::testing::{FixedOracle, StaticDrugLabelSource, StaticEncyclopedia};

use crate::api::{create_app, AppState};

/// State with no remote matches, no encyclopedia entries and an oracle that says "authentic"
pub(super) fn test_state() -> AppState {
    AppState::new(
        AppConfig::for_tests(),
        Arc::new(StaticDrugLabelSource::empty()),
        Arc::new(StaticEncyclopedia::empty()),
        Arc::new(FixedOracle::authentic()),
    )
}

pub(super) fn app(state: AppState) -> Router {
    create_app(state)
}

pub(super) fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub(super) fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub(super) fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub(super) fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub(super) fn post_bytes(uri: &str, content_type: &str, bytes: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(bytes))
        .unwrap()
}

/// Send a request and return the status with the raw body
pub(super) async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

/// Send a request and parse the body as JSON
pub(super) async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}
