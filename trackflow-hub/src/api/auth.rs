//! Authentication API handlers
//!
//! POST /api/auth/signup, POST /api/auth/signin, POST /api/auth/signout,
//! GET /api/auth/session

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use trackflow_common::auth as credentials;
use trackflow_common::db::{Principal, Profile, Role};

use crate::extract::AuthSession;
use crate::{db, ApiError, ApiResult, AppState};

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Session opened for a signed-in principal
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub principal: Principal,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub principal: Principal,
    pub profile: Profile,
}

/// POST /api/auth/signup
///
/// Creates an account with role artist, arranger, or engineer. The admin
/// role is never self-assignable; admin accounts are provisioned
/// out-of-band at startup.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let email = request.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::Validation("A valid email is required".to_string()));
    }
    credentials::validate_password(&request.password).map_err(ApiError::from)?;
    let display_name = request.display_name.trim();
    if display_name.is_empty() {
        return Err(ApiError::Validation("Display name is required".to_string()));
    }
    if request.role == Role::Admin {
        return Err(ApiError::Validation(
            "The admin role cannot be chosen at sign-up".to_string(),
        ));
    }

    let hash = credentials::hash_password(&request.password);
    let principal =
        db::accounts::create_account(&state.db, &email, &hash, display_name, request.role)
            .await?;
    let session = db::sessions::create_session(&state.db, principal.id).await?;

    tracing::info!(account_id = %principal.id, role = %principal.role, "Account created");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token: session.token,
            principal,
        }),
    ))
}

/// POST /api/auth/signin
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let email = request.email.trim().to_lowercase();

    // One failure message for both unknown email and wrong password
    let invalid = || ApiError::Unauthenticated("Invalid email or password".to_string());

    let (principal, password_hash) = db::accounts::find_by_email(&state.db, &email)
        .await?
        .ok_or_else(invalid)?;

    if !credentials::verify_password(&request.password, &password_hash) {
        return Err(invalid());
    }

    let session = db::sessions::create_session(&state.db, principal.id).await?;

    Ok(Json(AuthResponse {
        token: session.token,
        principal,
    }))
}

/// POST /api/auth/signout
pub async fn signout(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<StatusCode> {
    db::sessions::delete_session(&state.db, &session.token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/session
pub async fn session(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<SessionResponse>> {
    let profile = db::profiles::get_profile(&state.db, session.principal.id)
        .await?
        .ok_or_else(|| {
            ApiError::Internal(format!("Profile missing for account {}", session.principal.id))
        })?;

    Ok(Json(SessionResponse {
        principal: session.principal,
        profile,
    }))
}

/// Build authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/signin", post(signin))
        .route("/api/auth/signout", post(signout))
        .route("/api/auth/session", get(session))
}
