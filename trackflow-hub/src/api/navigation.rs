//! Navigation and authorization API handlers
//!
//! GET /api/navigation lists the caller's reachable destinations;
//! GET /api/authorize answers the allow/redirect question for one
//! destination and also works unauthenticated.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use trackflow_common::db::Role;

use crate::extract::{AuthSession, OptionalSession};
use crate::routing::{self, Destination, RouteDecision};
use crate::{ApiResult, AppState};

#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub role: Role,
    pub default_destination: Destination,
    pub destinations: Vec<Destination>,
}

#[derive(Debug, Deserialize)]
pub struct AuthorizeQuery {
    pub destination: Destination,
}

/// GET /api/navigation
pub async fn navigation(session: AuthSession) -> ApiResult<Json<NavigationResponse>> {
    let role = session.principal.role;
    Ok(Json(NavigationResponse {
        role,
        default_destination: routing::default_destination_for(role),
        destinations: routing::destinations_for(role).to_vec(),
    }))
}

/// GET /api/authorize?destination=...
pub async fn authorize(
    State(_state): State<AppState>,
    OptionalSession(principal): OptionalSession,
    Query(query): Query<AuthorizeQuery>,
) -> ApiResult<Json<RouteDecision>> {
    Ok(Json(routing::authorize(principal.as_ref(), query.destination)))
}

/// Build navigation routes
pub fn navigation_routes() -> Router<AppState> {
    Router::new()
        .route("/api/navigation", get(navigation))
        .route("/api/authorize", get(authorize))
}
