//! Demo track review workflow
//!
//! A demo track starts `pending` and receives exactly one decision:
//! `approved` or `rejected`. Both are terminal. Only admins decide; only
//! artists submit. Every operation takes the calling principal explicitly.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;
use trackflow_common::db::{DemoStatus, DemoTrack, Principal, Role};
use trackflow_common::{Error, Result};
use uuid::Uuid;

use crate::db::demos::{self, PendingDemo};
use crate::storage::AudioStore;

/// Metadata accompanying a new submission; the audio payload itself must
/// already be durably stored and is referenced by key
#[derive(Debug, Clone, Deserialize)]
pub struct NewDemo {
    pub title: String,
    pub genre: String,
    #[serde(default)]
    pub description: Option<String>,
    pub audio_url: String,
}

/// A reviewer's verdict on a pending demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    pub fn status(self) -> DemoStatus {
        match self {
            Decision::Approved => DemoStatus::Approved,
            Decision::Rejected => DemoStatus::Rejected,
        }
    }
}

/// Submit a new demo track
///
/// Caller must be an artist; title, genre, and the audio reference are
/// required, and the reference must point at an existing stored payload so
/// a record can never outlive its audio.
pub async fn submit_demo(
    pool: &SqlitePool,
    store: &dyn AudioStore,
    principal: &Principal,
    new: NewDemo,
) -> Result<DemoTrack> {
    if principal.role != Role::Artist {
        return Err(Error::Unauthorized(
            "Only artists may submit demo tracks".to_string(),
        ));
    }

    let title = new.title.trim();
    let genre = new.genre.trim();
    let audio_url = new.audio_url.trim();
    if title.is_empty() {
        return Err(Error::Validation("Title is required".to_string()));
    }
    if genre.is_empty() {
        return Err(Error::Validation("Genre is required".to_string()));
    }
    if audio_url.is_empty() {
        return Err(Error::Validation("Audio reference is required".to_string()));
    }
    if !store.exists(audio_url) {
        return Err(Error::Validation(format!(
            "Audio reference not found in storage: {}",
            audio_url
        )));
    }

    let demo = DemoTrack {
        id: Uuid::new_v4(),
        artist_id: principal.id,
        title: title.to_string(),
        genre: genre.to_string(),
        description: new
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
        audio_url: audio_url.to_string(),
        status: DemoStatus::Pending,
        submitted_at: Utc::now(),
        feedback: None,
        reviewed_at: None,
        reviewed_by: None,
    };

    demos::insert_demo(pool, &demo).await?;

    info!(demo_id = %demo.id, artist_id = %demo.artist_id, "Demo track submitted");

    Ok(demo)
}

/// List all pending demos, most recent submission first
///
/// Admin only. The result is a point-in-time snapshot, not a live feed.
pub async fn list_pending(pool: &SqlitePool, principal: &Principal) -> Result<Vec<PendingDemo>> {
    require_admin(principal, "review pending demos")?;
    demos::list_pending(pool).await
}

/// Apply a decision to a pending demo track
///
/// Admin only, and explicitly not idempotent: a second decision on the
/// same track fails with `InvalidState` and leaves the first decision's
/// record untouched. The underlying UPDATE re-checks the pending status at
/// write time, so of two concurrent reviewers at most one succeeds.
pub async fn decide(
    pool: &SqlitePool,
    principal: &Principal,
    demo_id: Uuid,
    decision: Decision,
    feedback: Option<String>,
) -> Result<DemoTrack> {
    require_admin(principal, "decide on demo tracks")?;

    let feedback = feedback
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty());
    let reviewed_at = Utc::now();

    let rows = demos::decide_demo(
        pool,
        demo_id,
        decision.status(),
        feedback.as_deref(),
        principal.id,
        reviewed_at,
    )
    .await?;

    if rows == 0 {
        // Either the track never existed or someone decided it first
        return match demos::get_demo(pool, demo_id).await? {
            None => Err(Error::NotFound(format!("Demo track not found: {}", demo_id))),
            Some(demo) => Err(Error::InvalidState(format!(
                "Demo track was already decided ({})",
                demo.status
            ))),
        };
    }

    let demo = demos::get_demo(pool, demo_id)
        .await?
        .ok_or_else(|| Error::Internal("Decided demo disappeared".to_string()))?;

    info!(
        demo_id = %demo.id,
        status = %demo.status,
        reviewed_by = %principal.id,
        "Demo track decided"
    );

    Ok(demo)
}

fn require_admin(principal: &Principal, action: &str) -> Result<()> {
    if principal.role != Role::Admin {
        return Err(Error::Unauthorized(format!("Only admins may {}", action)));
    }
    Ok(())
}
