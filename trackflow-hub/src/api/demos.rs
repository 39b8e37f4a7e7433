//! Demo track API handlers
//!
//! POST /api/demos, GET /api/demos/mine, GET /api/demos/pending,
//! POST /api/demos/:id/decision

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use trackflow_common::db::DemoTrack;
use uuid::Uuid;

use crate::db::demos::PendingDemo;
use crate::extract::AuthSession;
use crate::review::{self, Decision, NewDemo};
use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    pub decision: Decision,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// POST /api/demos
///
/// Artist submits metadata referencing an already-uploaded audio payload.
pub async fn submit_demo(
    State(state): State<AppState>,
    session: AuthSession,
    Json(request): Json<NewDemo>,
) -> ApiResult<(StatusCode, Json<DemoTrack>)> {
    let demo =
        review::submit_demo(&state.db, state.store.as_ref(), &session.principal, request).await?;
    Ok((StatusCode::CREATED, Json(demo)))
}

/// GET /api/demos/mine
///
/// The caller's own submissions, most recent first.
pub async fn my_demos(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<Vec<DemoTrack>>> {
    let demos = crate::db::demos::list_by_artist(&state.db, session.principal.id).await?;
    Ok(Json(demos))
}

/// GET /api/demos/pending
///
/// Admin-only snapshot of the review queue.
pub async fn pending_demos(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<Vec<PendingDemo>>> {
    let demos = review::list_pending(&state.db, &session.principal).await?;
    Ok(Json(demos))
}

/// POST /api/demos/:id/decision
pub async fn decide_demo(
    State(state): State<AppState>,
    session: AuthSession,
    Path(demo_id): Path<Uuid>,
    Json(request): Json<DecisionRequest>,
) -> ApiResult<Json<DemoTrack>> {
    let demo = review::decide(
        &state.db,
        &session.principal,
        demo_id,
        request.decision,
        request.feedback,
    )
    .await?;
    Ok(Json(demo))
}

/// Build demo track routes
pub fn demo_routes() -> Router<AppState> {
    Router::new()
        .route("/api/demos", post(submit_demo))
        .route("/api/demos/mine", get(my_demos))
        .route("/api/demos/pending", get(pending_demos))
        .route("/api/demos/:id/decision", post(decide_demo))
}
