use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use service::search::{self, SearchResult};

use crate::{errors::JsonApiError, state::AppState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    /// Substring to look for; empty returns no results.
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

#[utoipa::path(
    get, path = "/api/search/", tag = "search",
    params(SearchQuery),
    responses((status = 200, description = "Matches, services first", body = crate::openapi::SearchResponseDoc))
)]
pub async fn live_search(State(state): State<AppState>, Query(q): Query<SearchQuery>) -> Result<Json<SearchResponse>, JsonApiError> {
    let query = q.q.unwrap_or_default();
    let results = search::search(&state.db, &query, &state.site.media_url).await?;
    Ok(Json(SearchResponse { results }))
}
