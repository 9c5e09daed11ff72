use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use med_guard_domain::entities::metrics::{HealthMetricsReading, MetricsSubmission, Violation};
use med_guard_domain::entities::notice::Notice;

use crate::api::state::AppState;
use crate::entities::common::ErrorResponse;

/// Result of a validate-only request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MetricsValidationResponse {
    /// True when every entered value is in range
    pub valid: bool,

    /// Out-of-range values, in field order
    pub violations: Vec<Violation>,

    /// One notice per violation
    pub notices: Vec<Notice>,
}

/// Range-check a reading without saving it
#[utoipa::path(
    post,
    path = "/api/v1/metrics/validate",
    request_body = HealthMetricsReading,
    responses(
        (status = 200, description = "Validation result", body = MetricsValidationResponse)
    ),
    tag = "metrics"
)]
#[instrument(skip(state, reading))]
pub async fn validate_metrics(
    State(state): State<AppState>,
    Json(reading): Json<HealthMetricsReading>,
) -> Json<MetricsValidationResponse> {
    let violations = state.metrics.validate(&reading);
    let notices = violations.iter().map(Violation::notice).collect();

    Json(MetricsValidationResponse {
        valid: violations.is_empty(),
        violations,
        notices,
    })
}

/// Validate, save and report the advisory status of a reading
#[utoipa::path(
    post,
    path = "/api/v1/metrics",
    request_body = HealthMetricsReading,
    responses(
        (status = 200, description = "Metrics saved", body = MetricsSubmission),
        (status = 400, description = "Readings out of range", body = ErrorResponse)
    ),
    tag = "metrics"
)]
#[instrument(skip(state, reading))]
pub async fn submit_metrics(
    State(state): State<AppState>,
    Json(reading): Json<HealthMetricsReading>,
) -> Result<Json<MetricsSubmission>, ErrorResponse> {
    let submission = state.metrics.submit(reading).await?;
    info!(message = %submission.status.message, "Metrics submission handled");
    Ok(Json(submission))
}
