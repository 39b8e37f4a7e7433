//! Database initialization tests

use tempfile::tempdir;
use trackflow_common::db::init_database;

#[tokio::test]
async fn test_creates_database_and_parent_directories() {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("nested").join("trackflow.db");

    let pool = init_database(&db_path).await.expect("init_database failed");

    assert!(db_path.exists());

    // All four tables exist
    for table in ["accounts", "profiles", "sessions", "demo_tracks"] {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .expect("schema query failed");
        assert_eq!(count, 1, "missing table {}", table);
    }
}

#[tokio::test]
async fn test_init_is_idempotent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("trackflow.db");

    let pool = init_database(&db_path).await.expect("first init failed");

    sqlx::query("INSERT INTO accounts (id, email, password_hash, created_at) VALUES (?, ?, ?, ?)")
        .bind("a1")
        .bind("artist@example.com")
        .bind("salt$hash")
        .bind("2026-01-01T00:00:00Z")
        .execute(&pool)
        .await
        .expect("insert failed");
    drop(pool);

    // Re-opening must not clobber existing data
    let pool = init_database(&db_path).await.expect("second init failed");
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
        .fetch_one(&pool)
        .await
        .expect("count failed");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_foreign_keys_enforced() {
    let dir = tempdir().expect("Failed to create temp dir");
    let pool = init_database(&dir.path().join("trackflow.db"))
        .await
        .expect("init failed");

    // Profile without a backing account must be rejected
    let result = sqlx::query(
        "INSERT INTO profiles (id, display_name, role, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind("ghost")
    .bind("Ghost")
    .bind("artist")
    .bind("2026-01-01T00:00:00Z")
    .execute(&pool)
    .await;

    assert!(result.is_err());
}
