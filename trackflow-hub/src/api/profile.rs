//! Profile API handlers
//!
//! GET /api/profile, PUT /api/profile. Updates apply only to the caller's
//! own profile; the role field has no update path.

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Deserializer};
use trackflow_common::db::Profile;

use crate::db::profiles::{self, ProfileChanges};
use crate::extract::AuthSession;
use crate::{ApiError, ApiResult, AppState};

/// Distinguishes an omitted field (keep the current value) from an
/// explicit `null` (clear it)
fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub avatar_url: Option<Option<String>>,
}

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<Profile>> {
    let profile = profiles::get_profile(&state.db, session.principal.id)
        .await?
        .ok_or_else(|| {
            ApiError::Internal(format!("Profile missing for account {}", session.principal.id))
        })?;
    Ok(Json(profile))
}

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    session: AuthSession,
    Json(request): Json<UpdateProfileRequest>,
) -> ApiResult<Json<Profile>> {
    let changes = ProfileChanges {
        display_name: request.display_name,
        bio: request.bio,
        avatar_url: request.avatar_url,
    };
    let profile = profiles::update_profile(&state.db, session.principal.id, changes).await?;
    Ok(Json(profile))
}

/// Build profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/api/profile", get(get_profile).put(update_profile))
}
