//! Request extractors
//!
//! `AuthSession` resolves the bearer token to a `Principal` that handlers
//! pass explicitly into the workflow and routing layers. There is no
//! ambient current-user state.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use trackflow_common::db::Principal;

use crate::{db, ApiError, AppState};

/// Authenticated session: the principal plus the token that backs it
pub struct AuthSession {
    pub principal: Principal,
    pub token: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let token = bearer_token(parts)
            .ok_or_else(|| ApiError::Unauthenticated("Missing bearer token".to_string()))?;

        match db::sessions::principal_for_token(&state.db, &token).await? {
            Some(principal) => Ok(AuthSession { principal, token }),
            None => Err(ApiError::Unauthenticated(
                "Invalid or expired session".to_string(),
            )),
        }
    }
}

/// Optional session for endpoints that answer differently for guests
/// (an expired or unknown token counts as no session, not an error)
pub struct OptionalSession(pub Option<Principal>);

#[async_trait]
impl FromRequestParts<AppState> for OptionalSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let Some(token) = bearer_token(parts) else {
            return Ok(OptionalSession(None));
        };
        let principal = db::sessions::principal_for_token(&state.db, &token).await?;
        Ok(OptionalSession(principal))
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
