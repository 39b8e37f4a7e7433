//! Audio upload handler
//!
//! POST /api/uploads?ext=mp3 stores the raw request body in the blob store
//! and returns the generated key. Submitting the demo record is a separate
//! call that references this key.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use trackflow_common::db::Role;

use crate::extract::AuthSession;
use crate::storage::ALLOWED_EXTENSIONS;
use crate::{ApiError, ApiResult, AppState};

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub ext: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Storage key to reference in the demo submission
    pub audio_url: String,
    /// Public read URL derived from the key
    pub public_url: String,
}

/// POST /api/uploads
pub async fn upload_audio(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<UploadResponse>)> {
    if session.principal.role != Role::Artist {
        return Err(ApiError::Forbidden(
            "Only artists may upload demo audio".to_string(),
        ));
    }

    let ext = query.ext.trim().to_lowercase();
    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(ApiError::Validation(format!(
            "Unsupported audio format '{}' (expected one of: {})",
            ext,
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }
    if body.is_empty() {
        return Err(ApiError::Validation("Audio payload is empty".to_string()));
    }

    let key = state.store.store(session.principal.id, &ext, &body)?;
    let public_url = state.store.public_url(&key);

    tracing::info!(
        owner_id = %session.principal.id,
        key = %key,
        bytes = body.len(),
        "Audio payload stored"
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            audio_url: key,
            public_url,
        }),
    ))
}

/// Build upload routes
pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/api/uploads", post(upload_audio))
}
