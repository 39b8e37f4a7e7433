//! Shared test helpers: a real app over a temp-dir database and media
//! store, plus request plumbing.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;
use trackflow_common::db::Role;
use trackflow_hub::rooms::SeededRooms;
use trackflow_hub::search::SeededProfessionals;
use trackflow_hub::storage::FsAudioStore;
use trackflow_hub::{build_router, AppState};

pub struct TestApp {
    pub router: axum::Router,
    pub db: sqlx::SqlitePool,
    pub store: Arc<FsAudioStore>,
    _dir: tempfile::TempDir,
}

pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let db = trackflow_common::db::init_database(&dir.path().join("trackflow.db"))
        .await
        .expect("Failed to initialize database");
    let store = Arc::new(
        FsAudioStore::new(dir.path().join("media")).expect("Failed to create audio store"),
    );
    let rooms = Arc::new(SeededRooms::with_sample_data());
    let professionals = Arc::new(SeededProfessionals::with_sample_data());

    let state = AppState::new(db.clone(), store.clone(), rooms, professionals);

    TestApp {
        router: build_router(state),
        db,
        store,
        _dir: dir,
    }
}

impl TestApp {
    /// Send a JSON request, returning status and parsed body
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body was not JSON")
        };

        (status, value)
    }

    /// Upload raw audio bytes as the given artist, returning the storage key
    pub async fn upload_audio(&self, token: &str, ext: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(format!("/api/uploads?ext={}", ext))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .body(Body::from(&b"fake-audio-bytes"[..]))
            .expect("Failed to build upload request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Upload request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let value = serde_json::from_slice(&bytes).expect("Upload response was not JSON");

        (status, value)
    }

    /// Sign up a new account and return its session token
    pub async fn signup(&self, email: &str, role: &str) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/auth/signup",
                None,
                Some(json!({
                    "email": email,
                    "password": "secret123",
                    "display_name": email.split('@').next().unwrap_or("someone"),
                    "role": role,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "signup failed: {}", body);
        body["token"].as_str().expect("token missing").to_string()
    }

    /// Provision an admin out-of-band and sign in as them
    pub async fn seed_admin(&self, email: &str) -> String {
        trackflow_hub::db::accounts::seed_admin(&self.db, email, "secret123", "Admin")
            .await
            .expect("Failed to seed admin");

        let (status, body) = self
            .request(
                Method::POST,
                "/api/auth/signin",
                None,
                Some(json!({ "email": email, "password": "secret123" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "admin signin failed: {}", body);
        body["token"].as_str().expect("token missing").to_string()
    }

    /// Upload audio and submit a demo as the given artist token
    pub async fn submit_demo(&self, token: &str, title: &str, genre: &str) -> Value {
        let (status, upload) = self.upload_audio(token, "mp3").await;
        assert_eq!(status, StatusCode::CREATED, "upload failed: {}", upload);

        let (status, body) = self
            .request(
                Method::POST,
                "/api/demos",
                Some(token),
                Some(json!({
                    "title": title,
                    "genre": genre,
                    "audio_url": upload["audio_url"],
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "submit failed: {}", body);
        body
    }

    pub fn role_str(role: Role) -> &'static str {
        role.as_str()
    }
}
