//! Database access for trackflow-hub
//!
//! Timestamps are stored as RFC 3339 TEXT and parsed back here; enums go
//! through the model-level `as_str`/`parse` pairs.

pub mod accounts;
pub mod demos;
pub mod profiles;
pub mod sessions;

use chrono::{DateTime, Utc};
use trackflow_common::{Error, Result};
use uuid::Uuid;

pub(crate) fn parse_utc(value: &str, column: &str) -> Result<DateTime<Utc>> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::Internal(format!("Failed to parse {}: {}", column, e)))
}

pub(crate) fn parse_uuid(value: &str, column: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| Error::Internal(format!("Failed to parse {}: {}", column, e)))
}
