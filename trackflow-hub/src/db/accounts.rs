//! Account persistence
//!
//! An account row carries credentials; its profile row carries the public
//! identity and the role. Both are created in one transaction so a
//! half-registered account can never exist.

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::info;
use trackflow_common::db::{Principal, Role};
use trackflow_common::{auth, Error, Result};
use uuid::Uuid;

/// Create an account plus its profile, returning the new principal
///
/// The role is written once here and never updated anywhere in the
/// service.
pub async fn create_account(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
    display_name: &str,
    role: Role,
) -> Result<Principal> {
    let id = Uuid::new_v4();
    let now = Utc::now().to_rfc3339();

    let mut tx = pool.begin().await?;

    let inserted = sqlx::query(
        "INSERT INTO accounts (id, email, password_hash, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(id.to_string())
    .bind(email)
    .bind(password_hash)
    .bind(&now)
    .execute(&mut *tx)
    .await;

    if let Err(e) = inserted {
        if e.as_database_error()
            .map(|db| db.is_unique_violation())
            .unwrap_or(false)
        {
            return Err(Error::Validation("Email is already registered".to_string()));
        }
        return Err(e.into());
    }

    sqlx::query(
        "INSERT INTO profiles (id, display_name, role, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(id.to_string())
    .bind(display_name)
    .bind(role.as_str())
    .bind(&now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Principal {
        id,
        email: email.to_string(),
        role,
    })
}

/// Look up an account by email for sign-in
///
/// Returns the principal together with the stored password hash; the
/// caller verifies the password and must not leak which part failed.
pub async fn find_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<(Principal, String)>> {
    let row = sqlx::query(
        r#"
        SELECT a.id, a.email, a.password_hash, p.role
        FROM accounts a
        JOIN profiles p ON p.id = a.id
        WHERE a.email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => {
            let id = super::parse_uuid(&row.get::<String, _>("id"), "account id")?;
            let role = Role::parse(&row.get::<String, _>("role"))
                .map_err(|e| Error::Internal(e.to_string()))?;
            let principal = Principal {
                id,
                email: row.get("email"),
                role,
            };
            Ok(Some((principal, row.get("password_hash"))))
        }
        None => Ok(None),
    }
}

/// Seed an admin account at startup if the email is not yet registered
///
/// Sign-up can never assign the admin role; this is the only path that
/// mints one.
pub async fn seed_admin(
    pool: &SqlitePool,
    email: &str,
    password: &str,
    display_name: &str,
) -> Result<()> {
    if find_by_email(pool, email).await?.is_some() {
        return Ok(());
    }

    auth::validate_password(password)?;
    let hash = auth::hash_password(password);
    let principal = create_account(pool, email, &hash, display_name, Role::Admin).await?;
    info!(admin_id = %principal.id, "Seeded admin account");

    Ok(())
}
