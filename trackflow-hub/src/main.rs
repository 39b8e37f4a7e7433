//! trackflow-hub - Demo review and collaboration service
//!
//! HTTP backend for the Trackflow music-collaboration platform: artists
//! upload and submit demo tracks, admins review them, and approved
//! projects surface in production rooms.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use trackflow_common::config;
use trackflow_hub::rooms::SeededRooms;
use trackflow_hub::search::SeededProfessionals;
use trackflow_hub::storage::FsAudioStore;
use trackflow_hub::AppState;

#[derive(Debug, Parser)]
#[command(name = "trackflow-hub", version, about = "Trackflow demo review service")]
struct Args {
    /// Data root folder (database and media live here)
    #[arg(long)]
    root_folder: Option<String>,

    /// TCP port to listen on
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!("Starting trackflow-hub");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Resolve data root and create it if missing
    let root_folder = config::resolve_root_folder(args.root_folder.as_deref());
    config::ensure_directories(&root_folder)?;
    info!("Root folder: {}", root_folder.display());

    // Open or create database
    let db_path = config::database_path(&root_folder);
    info!("Database: {}", db_path.display());
    let db_pool = trackflow_common::db::init_database(&db_path).await?;

    // Admin accounts are provisioned here, never through sign-up
    if let Ok(admin) = std::env::var("TRACKFLOW_ADMIN") {
        let (email, password) = admin
            .split_once(':')
            .context("TRACKFLOW_ADMIN must be formatted as email:password")?;
        trackflow_hub::db::accounts::seed_admin(&db_pool, email, password, "Admin").await?;
    }

    let media_dir = config::media_dir(&root_folder);
    let store = Arc::new(FsAudioStore::new(media_dir.clone())?);
    let rooms = Arc::new(SeededRooms::with_sample_data());
    let professionals = Arc::new(SeededProfessionals::with_sample_data());

    let state = AppState::new(db_pool, store, rooms, professionals);

    // Uploaded audio is publicly readable under /media/<key>
    let app = trackflow_hub::build_router(state)
        .nest_service("/media", ServeDir::new(media_dir))
        .layer(TraceLayer::new_for_http());

    let port = config::resolve_port(args.port);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("Listening on http://127.0.0.1:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
