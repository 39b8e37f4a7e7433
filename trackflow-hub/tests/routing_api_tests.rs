//! Role-gated navigation integration tests

mod helpers;

use axum::http::{Method, StatusCode};

#[tokio::test]
async fn test_guest_is_redirected_to_login() {
    let app = helpers::spawn_app().await;

    let (status, body) = app
        .request(Method::GET, "/api/authorize?destination=dashboard", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decision"], "redirect");
    assert_eq!(body["to"], "login");

    let (_, body) = app
        .request(Method::GET, "/api/authorize?destination=login", None, None)
        .await;
    assert_eq!(body["decision"], "allow");
}

#[tokio::test]
async fn test_arranger_denied_upload_redirects_to_profile() {
    let app = helpers::spawn_app().await;
    let arranger = app.signup("arr@example.com", "arranger").await;

    let (status, body) = app
        .request(
            Method::GET,
            "/api/authorize?destination=upload",
            Some(&arranger),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decision"], "redirect");
    assert_eq!(body["to"], "profile");
}

#[tokio::test]
async fn test_granted_destination_allowed() {
    let app = helpers::spawn_app().await;
    let artist = app.signup("a@example.com", "artist").await;

    let (_, body) = app
        .request(
            Method::GET,
            "/api/authorize?destination=upload",
            Some(&artist),
            None,
        )
        .await;
    assert_eq!(body["decision"], "allow");

    // Artists have no grant for the admin review screen
    let (_, body) = app
        .request(
            Method::GET,
            "/api/authorize?destination=demo-review",
            Some(&artist),
            None,
        )
        .await;
    assert_eq!(body["decision"], "redirect");
    assert_eq!(body["to"], "upload");
}

#[tokio::test]
async fn test_expired_or_bogus_token_counts_as_guest() {
    let app = helpers::spawn_app().await;

    let (status, body) = app
        .request(
            Method::GET,
            "/api/authorize?destination=rooms",
            Some("bogus-token"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decision"], "redirect");
    assert_eq!(body["to"], "login");
}

#[tokio::test]
async fn test_navigation_lists_role_destinations() {
    let app = helpers::spawn_app().await;

    let artist = app.signup("a@example.com", "artist").await;
    let (status, body) = app
        .request(Method::GET, "/api/navigation", Some(&artist), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "artist");
    assert_eq!(body["default_destination"], "upload");
    assert_eq!(
        body["destinations"].as_array().unwrap().len(),
        3,
        "artist reaches exactly three destinations"
    );

    let admin = app.seed_admin("admin@example.com").await;
    let (_, body) = app
        .request(Method::GET, "/api/navigation", Some(&admin), None)
        .await;
    assert_eq!(body["role"], "admin");
    assert_eq!(body["default_destination"], "dashboard");
    let destinations: Vec<&str> = body["destinations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d.as_str().unwrap())
        .collect();
    assert_eq!(
        destinations,
        vec!["dashboard", "demo-review", "coordination", "rooms", "analytics", "settings"]
    );

    // Navigation requires a session
    let (status, _) = app.request(Method::GET, "/api/navigation", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rooms_visibility() {
    let app = helpers::spawn_app().await;

    // Admin sees the whole seeded catalog
    let admin = app.seed_admin("admin@example.com").await;
    let (status, rooms) = app
        .request(Method::GET, "/api/rooms", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rooms.as_array().unwrap().len(), 3);

    // A fresh engineer participates in none of them
    let engineer = app.signup("eng@example.com", "engineer").await;
    let (_, rooms) = app
        .request(Method::GET, "/api/rooms", Some(&engineer), None)
        .await;
    assert!(rooms.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = helpers::spawn_app().await;

    let (status, body) = app.request(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "trackflow-hub");
}
