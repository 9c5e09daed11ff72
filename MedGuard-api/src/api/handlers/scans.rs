use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use tracing::{debug, instrument};

use med_guard_domain::entities::notice::Notice;
use med_guard_domain::entities::scan::{
    ImageUpload, ScanAction, ScanHistoryEntry, ScanOutcome, ScanResult,
};
use med_guard_domain::services::ScanError;

use super::content_type;
use crate::api::state::AppState;
use crate::entities::common::ErrorResponse;

/// Scan a medicine photo sent as the raw request body
#[utoipa::path(
    post,
    path = "/api/v1/scans",
    request_body(content = Vec<u8>, description = "JPEG, PNG, GIF or WebP bytes, at most 5MB", content_type = "image/*"),
    responses(
        (status = 200, description = "Authenticity verdict", body = ScanOutcome),
        (status = 400, description = "Missing, unsupported or oversized image", body = ErrorResponse)
    ),
    tag = "scanner"
)]
#[instrument(skip(state, headers, body))]
pub async fn scan_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ScanOutcome>, ErrorResponse> {
    let upload = ImageUpload::new(content_type(&headers), body.to_vec());
    Ok(Json(state.scanner.scan(upload).await?))
}

/// Result of the last completed scan
#[utoipa::path(
    get,
    path = "/api/v1/scans/latest",
    responses(
        (status = 200, description = "Latest result", body = ScanResult),
        (status = 404, description = "No scan yet", body = ErrorResponse)
    ),
    tag = "scanner"
)]
pub async fn latest_scan(State(state): State<AppState>) -> Result<Json<ScanResult>, ErrorResponse> {
    state
        .scanner
        .latest()
        .map(Json)
        .ok_or_else(|| ScanError::NoResult.into())
}

/// Remove the selected image and its result
#[utoipa::path(
    delete,
    path = "/api/v1/scans/latest",
    responses(
        (status = 204, description = "Scanner cleared")
    ),
    tag = "scanner"
)]
#[instrument(skip(state))]
pub async fn clear_scan(State(state): State<AppState>) -> StatusCode {
    if !state.scanner.clear() {
        debug!("Scanner was already empty");
    }
    StatusCode::NO_CONTENT
}

/// Share, download or report the current result
#[utoipa::path(
    post,
    path = "/api/v1/scans/actions/{action}",
    params(
        ("action" = String, Path, description = "share, download or report")
    ),
    responses(
        (status = 200, description = "Action acknowledged", body = Notice),
        (status = 404, description = "Unknown action or no result", body = ErrorResponse)
    ),
    tag = "scanner"
)]
#[instrument(skip(state))]
pub async fn scan_action(
    State(state): State<AppState>,
    Path(action): Path<String>,
) -> Result<Json<Notice>, ErrorResponse> {
    let action: ScanAction = action.parse().map_err(|_| ScanError::UnknownAction(action.clone()))?;
    Ok(Json(state.scanner.perform_action(action)?))
}

/// Past scans
#[utoipa::path(
    get,
    path = "/api/v1/scans/history",
    responses(
        (status = 200, description = "Scan history", body = Vec<ScanHistoryEntry>)
    ),
    tag = "scanner"
)]
pub async fn scan_history(State(state): State<AppState>) -> Json<Vec<ScanHistoryEntry>> {
    Json(state.scanner.history())
}
