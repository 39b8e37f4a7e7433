//! Production room API handlers
//!
//! GET /api/rooms lists the rooms visible to the caller.

use axum::{extract::State, routing::get, Json, Router};
use trackflow_common::db::ProductionRoom;

use crate::extract::AuthSession;
use crate::{ApiResult, AppState};

/// GET /api/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<Vec<ProductionRoom>>> {
    Ok(Json(state.rooms.rooms_for(&session.principal)))
}

/// Build room routes
pub fn room_routes() -> Router<AppState> {
    Router::new().route("/api/rooms", get(list_rooms))
}
