use axum::Json;
use tracing::debug;

use med_guard_domain::entities::navigation::{screen_links, ScreenLink};

/// Screens of the application in menu order
#[utoipa::path(
    get,
    path = "/api/v1/navigation",
    responses(
        (status = 200, description = "Screen list", body = Vec<ScreenLink>)
    ),
    tag = "navigation"
)]
pub async fn list_screens() -> Json<Vec<ScreenLink>> {
    debug!("Navigation requested");
    Json(screen_links())
}
