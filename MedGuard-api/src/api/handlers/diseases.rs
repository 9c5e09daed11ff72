use axum::{
    extract::{Query, State},
    Json,
};
use tracing::instrument;

use med_guard_domain::entities::disease::DiseaseLookupOutcome;

use crate::api::state::AppState;
use crate::entities::common::{ErrorResponse, SearchQuery};

/// Look up an encyclopedia summary for a disease
#[utoipa::path(
    get,
    path = "/api/v1/diseases/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Lookup outcome, possibly empty", body = DiseaseLookupOutcome),
        (status = 400, description = "Blank search term", body = ErrorResponse)
    ),
    tag = "search"
)]
#[instrument(skip(state))]
pub async fn search_diseases(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<DiseaseLookupOutcome>, ErrorResponse> {
    let term = query.q.unwrap_or_default();
    let outcome = state.disease_search.lookup(&term).await?;
    Ok(Json(outcome))
}
