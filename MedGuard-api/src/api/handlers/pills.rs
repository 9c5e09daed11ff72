use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use tracing::instrument;

use med_guard_domain::entities::pill::{PillImageAnalysis, PillSearchCriteria, PillSearchOutcome};
use med_guard_domain::entities::scan::ImageUpload;

use super::content_type;
use crate::api::state::AppState;
use crate::entities::common::ErrorResponse;

/// Find pills by colour, shape or imprint
#[utoipa::path(
    post,
    path = "/api/v1/pills/identify",
    request_body = PillSearchCriteria,
    responses(
        (status = 200, description = "Matching pills", body = PillSearchOutcome),
        (status = 400, description = "No criteria given", body = ErrorResponse)
    ),
    tag = "pills"
)]
#[instrument(skip(state))]
pub async fn identify_pill(
    State(state): State<AppState>,
    Json(criteria): Json<PillSearchCriteria>,
) -> Result<Json<PillSearchOutcome>, ErrorResponse> {
    Ok(Json(state.pills.identify(criteria).await?))
}

/// Extract pill criteria from a photo sent as the raw request body
#[utoipa::path(
    post,
    path = "/api/v1/pills/analyze",
    request_body(content = Vec<u8>, description = "Image bytes", content_type = "image/*"),
    responses(
        (status = 200, description = "Extracted criteria", body = PillImageAnalysis),
        (status = 400, description = "Not an image", body = ErrorResponse)
    ),
    tag = "pills"
)]
#[instrument(skip(state, headers, body))]
pub async fn analyze_pill_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<PillImageAnalysis>, ErrorResponse> {
    let upload = ImageUpload::new(content_type(&headers), body.to_vec());
    Ok(Json(state.pills.analyze_image(upload).await?))
}
