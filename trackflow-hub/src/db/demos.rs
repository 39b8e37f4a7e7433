//! Demo track persistence
//!
//! The decision UPDATE is conditional on the row still being pending at
//! write time; that single statement is what guarantees at-most-one
//! successful decision under concurrent reviewers.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{Row, SqlitePool};
use trackflow_common::db::{DemoStatus, DemoTrack};
use trackflow_common::Result;
use uuid::Uuid;

/// A pending demo joined with its submitting artist, as shown to reviewers
#[derive(Debug, Clone, Serialize)]
pub struct PendingDemo {
    #[serde(flatten)]
    pub demo: DemoTrack,
    pub artist_name: String,
    pub artist_avatar_url: Option<String>,
}

/// Insert a freshly submitted demo track
///
/// All columns land in one INSERT; there is no partially written record.
pub async fn insert_demo(pool: &SqlitePool, demo: &DemoTrack) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO demo_tracks (
            id, artist_id, title, genre, description, audio_url,
            status, submitted_at, feedback, reviewed_at, reviewed_by
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(demo.id.to_string())
    .bind(demo.artist_id.to_string())
    .bind(&demo.title)
    .bind(&demo.genre)
    .bind(&demo.description)
    .bind(&demo.audio_url)
    .bind(demo.status.as_str())
    .bind(demo.submitted_at.to_rfc3339())
    .bind(&demo.feedback)
    .bind(demo.reviewed_at.map(|dt| dt.to_rfc3339()))
    .bind(demo.reviewed_by.map(|id| id.to_string()))
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_demo(pool: &SqlitePool, id: Uuid) -> Result<Option<DemoTrack>> {
    let row = sqlx::query(
        r#"
        SELECT id, artist_id, title, genre, description, audio_url,
               status, submitted_at, feedback, reviewed_at, reviewed_by
        FROM demo_tracks
        WHERE id = ?
        "#,
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => Ok(Some(demo_from_row(&row)?)),
        None => Ok(None),
    }
}

/// All pending demos, most recent submission first, each joined with the
/// submitting artist's display name and avatar
pub async fn list_pending(pool: &SqlitePool) -> Result<Vec<PendingDemo>> {
    let rows = sqlx::query(
        r#"
        SELECT d.id, d.artist_id, d.title, d.genre, d.description, d.audio_url,
               d.status, d.submitted_at, d.feedback, d.reviewed_at, d.reviewed_by,
               p.display_name, p.avatar_url
        FROM demo_tracks d
        JOIN profiles p ON p.id = d.artist_id
        WHERE d.status = 'pending'
        ORDER BY d.submitted_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut demos = Vec::with_capacity(rows.len());
    for row in &rows {
        demos.push(PendingDemo {
            demo: demo_from_row(row)?,
            artist_name: row.get("display_name"),
            artist_avatar_url: row.get("avatar_url"),
        });
    }

    Ok(demos)
}

/// Demos submitted by one artist, most recent first
pub async fn list_by_artist(pool: &SqlitePool, artist_id: Uuid) -> Result<Vec<DemoTrack>> {
    let rows = sqlx::query(
        r#"
        SELECT id, artist_id, title, genre, description, audio_url,
               status, submitted_at, feedback, reviewed_at, reviewed_by
        FROM demo_tracks
        WHERE artist_id = ?
        ORDER BY submitted_at DESC
        "#,
    )
    .bind(artist_id.to_string())
    .fetch_all(pool)
    .await?;

    rows.iter().map(demo_from_row).collect()
}

/// Conditionally apply a decision to a pending demo
///
/// The WHERE clause re-checks `status = 'pending'` at write time, so two
/// racing reviewers cannot both succeed: the loser's UPDATE matches zero
/// rows and the caller reports the track as already decided.
pub async fn decide_demo(
    pool: &SqlitePool,
    id: Uuid,
    status: DemoStatus,
    feedback: Option<&str>,
    reviewed_by: Uuid,
    reviewed_at: DateTime<Utc>,
) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE demo_tracks
        SET status = ?, feedback = ?, reviewed_at = ?, reviewed_by = ?
        WHERE id = ? AND status = 'pending'
        "#,
    )
    .bind(status.as_str())
    .bind(feedback)
    .bind(reviewed_at.to_rfc3339())
    .bind(reviewed_by.to_string())
    .bind(id.to_string())
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

fn demo_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<DemoTrack> {
    let reviewed_at: Option<String> = row.get("reviewed_at");
    let reviewed_by: Option<String> = row.get("reviewed_by");

    Ok(DemoTrack {
        id: super::parse_uuid(&row.get::<String, _>("id"), "demo id")?,
        artist_id: super::parse_uuid(&row.get::<String, _>("artist_id"), "artist_id")?,
        title: row.get("title"),
        genre: row.get("genre"),
        description: row.get("description"),
        audio_url: row.get("audio_url"),
        status: DemoStatus::parse(&row.get::<String, _>("status"))?,
        submitted_at: super::parse_utc(&row.get::<String, _>("submitted_at"), "submitted_at")?,
        feedback: row.get("feedback"),
        reviewed_at: reviewed_at
            .map(|s| super::parse_utc(&s, "reviewed_at"))
            .transpose()?,
        reviewed_by: reviewed_by
            .map(|s| super::parse_uuid(&s, "reviewed_by"))
            .transpose()?,
    })
}
