//! HTTP-level integration tests for session lifecycle and onboarding.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_auth, start_session};

/// Starting a session returns 201 with a bearer token.
#[tokio::test]
async fn start_session_issues_a_token() {
    let app = common::build_test_app();
    let token = start_session(&app).await;
    assert!(!token.is_empty());
}

/// A fresh session has no identity and an unfinished introduction.
#[tokio::test]
async fn fresh_session_snapshot() {
    let app = common::build_test_app();
    let token = start_session(&app).await;

    let response = get_auth(&app, "/api/v1/session", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["onboarding_complete"], false);
    assert!(json["data"].get("identity").is_none());
}

/// Completing onboarding flips the flag; doing it twice is harmless.
#[tokio::test]
async fn onboarding_completion_is_idempotent() {
    let app = common::build_test_app();
    let token = start_session(&app).await;

    for _ in 0..2 {
        let response = post_auth(&app, "/api/v1/session/onboarding/complete", &token).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let json = body_json(get_auth(&app, "/api/v1/session", &token).await).await;
    assert_eq!(json["data"]["onboarding_complete"], true);
}

/// Requests without an Authorization header are rejected.
#[tokio::test]
async fn missing_token_is_unauthorized() {
    let app = common::build_test_app();
    let response = common::get(&app, "/api/v1/session").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

/// Tokens the registry has never issued are rejected.
#[tokio::test]
async fn unknown_token_is_unauthorized() {
    let app = common::build_test_app();
    let response = get_auth(
        &app,
        "/api/v1/session",
        "00000000-0000-4000-8000-000000000000",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Malformed (non-UUID) tokens are rejected, not 500s.
#[tokio::test]
async fn malformed_token_is_unauthorized() {
    let app = common::build_test_app();
    let response = get_auth(&app, "/api/v1/session", "not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
