//! Database initialization
//!
//! Opens (or creates) the SQLite database and brings the schema up to date.
//! Migrations are idempotent `CREATE TABLE IF NOT EXISTS` statements, safe
//! to run on every startup.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // mode=rwc: read, write, create
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // WAL allows concurrent readers with one writer; the conditional
    // decision update relies on SQLite serializing the competing writes
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_tables(&pool).await?;

    Ok(pool)
}

/// Create all Trackflow tables (idempotent)
///
/// Public so integration tests can initialize an in-memory pool with the
/// real schema instead of a hand-written copy.
pub async fn create_tables(pool: &SqlitePool) -> Result<()> {
    create_accounts_table(pool).await?;
    create_profiles_table(pool).await?;
    create_sessions_table(pool).await?;
    create_demo_tracks_table(pool).await?;
    Ok(())
}

async fn create_accounts_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS accounts (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_profiles_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            id TEXT PRIMARY KEY REFERENCES accounts(id),
            display_name TEXT NOT NULL,
            role TEXT NOT NULL,
            bio TEXT,
            avatar_url TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_sessions_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            token TEXT PRIMARY KEY,
            account_id TEXT NOT NULL REFERENCES accounts(id),
            created_at TEXT NOT NULL,
            expires_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_demo_tracks_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS demo_tracks (
            id TEXT PRIMARY KEY,
            artist_id TEXT NOT NULL REFERENCES profiles(id),
            title TEXT NOT NULL,
            genre TEXT NOT NULL,
            description TEXT,
            audio_url TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            submitted_at TEXT NOT NULL,
            feedback TEXT,
            reviewed_at TEXT,
            reviewed_by TEXT REFERENCES profiles(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // list_pending filters on status and orders by submitted_at
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_demo_tracks_status_submitted
         ON demo_tracks(status, submitted_at)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
