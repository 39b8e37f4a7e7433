//! Session persistence
//!
//! Bearer tokens are opaque random strings stored with an expiry; a hit on
//! an expired row deletes it and counts as no session.

use chrono::{Duration, Utc};
use sqlx::{Row, SqlitePool};
use trackflow_common::db::{Principal, Role, Session};
use trackflow_common::{auth, Error, Result};
use uuid::Uuid;

/// Sessions live for seven days from sign-in
const SESSION_TTL_DAYS: i64 = 7;

/// Open a new session for an account
pub async fn create_session(pool: &SqlitePool, account_id: Uuid) -> Result<Session> {
    let now = Utc::now();
    let session = Session {
        token: auth::generate_session_token(),
        account_id,
        created_at: now,
        expires_at: now + Duration::days(SESSION_TTL_DAYS),
    };

    sqlx::query(
        "INSERT INTO sessions (token, account_id, created_at, expires_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&session.token)
    .bind(session.account_id.to_string())
    .bind(session.created_at.to_rfc3339())
    .bind(session.expires_at.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(session)
}

/// Resolve a bearer token to its principal
///
/// Returns `None` for unknown and for expired tokens; expired rows are
/// deleted on sight.
pub async fn principal_for_token(pool: &SqlitePool, token: &str) -> Result<Option<Principal>> {
    let row = sqlx::query(
        r#"
        SELECT s.expires_at, a.id, a.email, p.role
        FROM sessions s
        JOIN accounts a ON a.id = s.account_id
        JOIN profiles p ON p.id = a.id
        WHERE s.token = ?
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let expires_at = super::parse_utc(&row.get::<String, _>("expires_at"), "expires_at")?;
    if expires_at <= Utc::now() {
        delete_session(pool, token).await?;
        return Ok(None);
    }

    let id = super::parse_uuid(&row.get::<String, _>("id"), "account id")?;
    let role = Role::parse(&row.get::<String, _>("role"))
        .map_err(|e| Error::Internal(e.to_string()))?;

    Ok(Some(Principal {
        id,
        email: row.get("email"),
        role,
    }))
}

/// Close a session (sign-out); closing an unknown token is a no-op
pub async fn delete_session(pool: &SqlitePool, token: &str) -> Result<()> {
    sqlx::query("DELETE FROM sessions WHERE token = ?")
        .bind(token)
        .execute(pool)
        .await?;

    Ok(())
}
