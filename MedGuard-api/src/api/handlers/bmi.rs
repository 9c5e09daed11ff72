use axum::Json;
use tracing::instrument;

use med_guard_domain::entities::bmi::{BmiRequest, BmiResult};

use crate::entities::common::ErrorResponse;

/// Body mass index from height and weight
#[utoipa::path(
    post,
    path = "/api/v1/bmi",
    request_body = BmiRequest,
    responses(
        (status = 200, description = "BMI and category", body = BmiResult),
        (status = 400, description = "Height or weight not positive", body = ErrorResponse)
    ),
    tag = "bmi"
)]
#[instrument]
pub async fn calculate(Json(request): Json<BmiRequest>) -> Result<Json<BmiResult>, ErrorResponse> {
    Ok(Json(request.calculate()?))
}
