//! trackflow-hub library interface
//!
//! Exposes the application state, router construction, and the review
//! workflow for integration testing.

pub mod api;
pub mod db;
pub mod error;
pub mod extract;
pub mod review;
pub mod rooms;
pub mod routing;
pub mod search;
pub mod storage;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::rooms::RoomDirectory;
use crate::search::ProfessionalDirectory;
use crate::storage::AudioStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Demo audio blob store
    pub store: Arc<dyn AudioStore>,
    /// Production room directory
    pub rooms: Arc<dyn RoomDirectory>,
    /// Professional search directory
    pub professionals: Arc<dyn ProfessionalDirectory>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        db: SqlitePool,
        store: Arc<dyn AudioStore>,
        rooms: Arc<dyn RoomDirectory>,
        professionals: Arc<dyn ProfessionalDirectory>,
    ) -> Self {
        Self {
            db,
            store,
            rooms,
            professionals,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
///
/// Media files are served separately (see `main.rs`); everything here is
/// the JSON API surface.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::auth_routes())
        .merge(api::upload_routes())
        .merge(api::demo_routes())
        .merge(api::profile_routes())
        .merge(api::room_routes())
        .merge(api::search_routes())
        .merge(api::navigation_routes())
        .merge(api::health_routes())
        .with_state(state)
}
