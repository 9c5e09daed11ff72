use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

use med_guard_domain::entities::reminder::{Reminder, ReminderBookView, ReminderDraft};

use crate::api::state::AppState;

/// Result of posting a draft
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReminderUpdate {
    /// The new reminder; absent when the draft was incomplete
    pub added: Option<Reminder>,

    /// Reminder list and draft after the update
    pub book: ReminderBookView,
}

/// Current reminders and draft
#[utoipa::path(
    get,
    path = "/api/v1/reminders",
    responses(
        (status = 200, description = "Reminder list and draft", body = ReminderBookView)
    ),
    tag = "reminders"
)]
pub async fn list_reminders(State(state): State<AppState>) -> Json<ReminderBookView> {
    Json(state.reminders.view())
}

/// Store the draft and add it when medicine and time are both filled in
#[utoipa::path(
    post,
    path = "/api/v1/reminders",
    request_body = ReminderDraft,
    responses(
        (status = 201, description = "Reminder added", body = ReminderUpdate),
        (status = 200, description = "Draft stored, nothing added", body = ReminderUpdate)
    ),
    tag = "reminders"
)]
#[instrument(skip(state))]
pub async fn add_reminder(
    State(state): State<AppState>,
    Json(draft): Json<ReminderDraft>,
) -> (StatusCode, Json<ReminderUpdate>) {
    let (added, book) = state.reminders.add(draft);
    let status = if added.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    (status, Json(ReminderUpdate { added, book }))
}

/// Remove a reminder; unknown ids are ignored
#[utoipa::path(
    delete,
    path = "/api/v1/reminders/{id}",
    params(
        ("id" = Uuid, Path, description = "Reminder ID")
    ),
    responses(
        (status = 204, description = "Reminder removed or already absent")
    ),
    tag = "reminders"
)]
#[instrument(skip(state))]
pub async fn delete_reminder(State(state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    if !state.reminders.delete(id) {
        debug!(%id, "No reminder with this id");
    }
    StatusCode::NO_CONTENT
}
