//! Professional search API handlers
//!
//! GET /api/search filters and sorts the professional directory.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use trackflow_common::db::Role;

use crate::extract::AuthSession;
use crate::search::{Professional, SearchFilter, SortBy};
use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub sort: Option<SortBy>,
}

/// GET /api/search?q=…&role=…&genre=…&sort=…
pub async fn search(
    State(state): State<AppState>,
    _session: AuthSession,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Professional>>> {
    let filter = SearchFilter {
        query: query.q.filter(|q| !q.trim().is_empty()),
        role: query.role,
        genre: query.genre.filter(|g| !g.trim().is_empty()),
        sort: query.sort.unwrap_or_default(),
    };
    Ok(Json(state.professionals.search(&filter)))
}

/// Build search routes
pub fn search_routes() -> Router<AppState> {
    Router::new().route("/api/search", get(search))
}
