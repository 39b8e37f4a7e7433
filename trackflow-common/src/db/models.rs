//! Database models
//!
//! Status and role fields are stored as TEXT; the enums here are the only
//! place those strings are produced or parsed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Role assigned at sign-up, immutable afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Artist,
    Arranger,
    Engineer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Artist => "artist",
            Role::Arranger => "arranger",
            Role::Engineer => "engineer",
            Role::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Result<Role> {
        match s {
            "artist" => Ok(Role::Artist),
            "arranger" => Ok(Role::Arranger),
            "engineer" => Ok(Role::Engineer),
            "admin" => Ok(Role::Admin),
            other => Err(Error::Validation(format!("Unknown role: {}", other))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review state of a submitted demo track
///
/// `pending` is the initial state; `approved` and `rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoStatus {
    Pending,
    Approved,
    Rejected,
}

impl DemoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoStatus::Pending => "pending",
            DemoStatus::Approved => "approved",
            DemoStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Result<DemoStatus> {
        match s {
            "pending" => Ok(DemoStatus::Pending),
            "approved" => Ok(DemoStatus::Approved),
            "rejected" => Ok(DemoStatus::Rejected),
            other => Err(Error::Internal(format!("Unknown demo status: {}", other))),
        }
    }

    /// Terminal statuses permit no further transition
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DemoStatus::Pending)
    }
}

impl std::fmt::Display for DemoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Production room lifecycle stage (data shape only; rooms carry no
/// transition logic in this service)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Setup,
    InProgress,
    Review,
    Completed,
}

/// Authenticated identity plus its role
///
/// Passed explicitly into every workflow and routing call; there is no
/// ambient session state anywhere in the services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

/// Public profile, one-to-one with an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub display_name: String,
    pub role: Role,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A submitted demo track awaiting or having received an admin decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoTrack {
    pub id: Uuid,
    pub artist_id: Uuid,
    pub title: String,
    pub genre: String,
    pub description: Option<String>,
    /// Blob storage key, `<owner-id>/<timestamp>.<ext>`
    pub audio_url: String,
    pub status: DemoStatus,
    pub submitted_at: DateTime<Utc>,
    pub feedback: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<Uuid>,
}

/// Production room connecting an approved demo's collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionRoom {
    pub id: Uuid,
    pub demo_track_id: Uuid,
    pub artist_id: Uuid,
    pub arranger_id: Option<Uuid>,
    pub engineer_id: Option<Uuid>,
    pub admin_id: Uuid,
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
}

impl ProductionRoom {
    /// Whether the given principal id participates in this room
    pub fn has_participant(&self, id: Uuid) -> bool {
        self.artist_id == id
            || self.admin_id == id
            || self.arranger_id == Some(id)
            || self.engineer_id == Some(id)
    }
}

/// Persisted session row backing a bearer token
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub account_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
