//! Profile persistence
//!
//! A profile is mutable by its owner only; the role column is written at
//! account creation and never updated here.

use sqlx::{Row, SqlitePool};
use trackflow_common::db::{Profile, Role};
use trackflow_common::{Error, Result};
use uuid::Uuid;

/// Fields an owner may change about their own profile
///
/// Optional fields are doubly wrapped: outer `None` leaves the current
/// value alone, `Some(None)` clears it.
#[derive(Debug, Default, Clone)]
pub struct ProfileChanges {
    pub display_name: Option<String>,
    pub bio: Option<Option<String>>,
    pub avatar_url: Option<Option<String>>,
}

pub async fn get_profile(pool: &SqlitePool, id: Uuid) -> Result<Option<Profile>> {
    let row = sqlx::query(
        "SELECT id, display_name, role, bio, avatar_url, created_at FROM profiles WHERE id = ?",
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => Ok(Some(profile_from_row(&row)?)),
        None => Ok(None),
    }
}

/// Apply owner edits and return the updated profile
pub async fn update_profile(
    pool: &SqlitePool,
    owner_id: Uuid,
    changes: ProfileChanges,
) -> Result<Profile> {
    let current = get_profile(pool, owner_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Profile not found: {}", owner_id)))?;

    let display_name = changes.display_name.unwrap_or(current.display_name);
    if display_name.trim().is_empty() {
        return Err(Error::Validation("Display name must not be empty".to_string()));
    }
    let bio = changes.bio.unwrap_or(current.bio);
    let avatar_url = changes.avatar_url.unwrap_or(current.avatar_url);

    sqlx::query(
        "UPDATE profiles SET display_name = ?, bio = ?, avatar_url = ? WHERE id = ?",
    )
    .bind(&display_name)
    .bind(&bio)
    .bind(&avatar_url)
    .bind(owner_id.to_string())
    .execute(pool)
    .await?;

    Ok(Profile {
        display_name,
        bio,
        avatar_url,
        ..current
    })
}

fn profile_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Profile> {
    Ok(Profile {
        id: super::parse_uuid(&row.get::<String, _>("id"), "profile id")?,
        display_name: row.get("display_name"),
        role: Role::parse(&row.get::<String, _>("role"))
            .map_err(|e| Error::Internal(e.to_string()))?,
        bio: row.get("bio"),
        avatar_url: row.get("avatar_url"),
        created_at: super::parse_utc(&row.get::<String, _>("created_at"), "created_at")?,
    })
}
