use axum::Json;
use tracing::instrument;

use med_guard_domain::entities::auth::{LoginOutcome, LoginRequest};
use med_guard_domain::services::login as simulated_login;

use crate::entities::common::ErrorResponse;

/// Simulated login; any well-formed email and non-empty password is accepted
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login accepted", body = LoginOutcome),
        (status = 400, description = "Malformed login form", body = ErrorResponse)
    ),
    tag = "auth"
)]
#[instrument(skip(request))]
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginOutcome>, ErrorResponse> {
    let outcome = simulated_login(&request)?;
    Ok(Json(outcome))
}
