use axum::{
    extract::{Query, State},
    Json,
};
use tracing::instrument;

use med_guard_domain::entities::drug::DrugSearchOutcome;

use crate::api::state::AppState;
use crate::entities::common::{ErrorResponse, SearchQuery};

/// Search the local drug table, falling back to the drug label API
#[utoipa::path(
    get,
    path = "/api/v1/drugs/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search outcome, possibly empty", body = DrugSearchOutcome),
        (status = 400, description = "Blank search term", body = ErrorResponse)
    ),
    tag = "search"
)]
#[instrument(skip(state))]
pub async fn search_drugs(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<DrugSearchOutcome>, ErrorResponse> {
    let term = query.q.unwrap_or_default();
    let outcome = state.drug_search.search(&term).await?;
    Ok(Json(outcome))
}
