//! Shared harness for the HTTP integration tests.
//!
//! Builds the application with the same router and middleware stack the
//! binary uses, backed by a fresh in-memory session registry per test.

// Each integration test binary compiles this module independently and
// uses a different subset of the helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use campusease_api::config::{ServerConfig, TipConfig};
use campusease_api::router::build_app_router;
use campusease_api::sessions::SessionRegistry;
use campusease_api::state::AppState;
use campusease_api::tips::UnconfiguredTipSource;
use campusease_core::room::RoomCatalog;
use campusease_core::tips::TipSource;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and no tip provider endpoint.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        tip: TipConfig {
            api_url: None,
            api_key: None,
            timeout_secs: 1,
        },
    }
}

/// Build the full application router with all middleware layers and a
/// fresh in-memory state. Tips are unconfigured (fallback copy only).
pub fn build_test_app() -> Router {
    build_test_app_with_tips(Arc::new(UnconfiguredTipSource))
}

/// Like [`build_test_app`], but with an injected tip source.
pub fn build_test_app_with_tips(tips: Arc<dyn TipSource>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        catalog: Arc::new(RoomCatalog::builtin()),
        sessions: Arc::new(SessionRegistry::new()),
        tips,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// GET without authentication.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// GET with a session bearer token.
pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, bearer(token))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST a JSON body without authentication.
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST a JSON body with a session bearer token.
pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, bearer(token))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST with an empty body and a session bearer token.
pub async fn post_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, bearer(token))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// PATCH a JSON body with a session bearer token.
pub async fn patch_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PATCH")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, bearer(token))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Session flow helpers
// ---------------------------------------------------------------------------

/// Start a fresh session and return its bearer token.
pub async fn start_session(app: &Router) -> String {
    let response = post_json(app, "/api/v1/session", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["token"]
        .as_str()
        .expect("session token must be a string")
        .to_string()
}

/// Start a session and complete the first-run introduction.
pub async fn onboarded_session(app: &Router) -> String {
    let token = start_session(app).await;
    let response = post_auth(app, "/api/v1/session/onboarding/complete", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    token
}

/// Session signed in as a student (`jane.doe@university.edu`).
pub async fn student_session(app: &Router) -> String {
    let token = onboarded_session(app).await;
    let body = serde_json::json!({
        "email": "jane.doe@university.edu",
        "password": "correct-horse",
        "role": "student",
    });
    let response = post_json_auth(app, "/api/v1/auth/sign-in", &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    token
}

/// Session signed in as an assigner (`ops@admin.edu`).
pub async fn assigner_session(app: &Router) -> String {
    let token = onboarded_session(app).await;
    let body = serde_json::json!({
        "email": "ops@admin.edu",
        "password": "correct-horse",
        "role": "assigner",
    });
    let response = post_json_auth(app, "/api/v1/auth/sign-in", &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    token
}

/// Book a room for a student session and return the created reservation id.
pub async fn book_room(app: &Router, token: &str, room_id: &str) -> String {
    let body = serde_json::json!({ "room_id": room_id });
    let response = post_json_auth(app, "/api/v1/reservations", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["outcome"], "accepted");
    json["data"]["reservation"]["id"]
        .as_str()
        .expect("reservation id must be a string")
        .to_string()
}
