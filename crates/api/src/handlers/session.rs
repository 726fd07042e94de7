//! Handlers for the `/session` resource (start, snapshot, onboarding).
//!
//! A session is the unit of client state: it exists before sign-in so the
//! first-run introduction and the navigation policy can work for fresh
//! clients, and it owns the reservation store for its lifetime.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use campusease_core::error::CoreError;
use campusease_core::identity::Identity;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for `POST /session`.
#[derive(Debug, Serialize)]
pub struct SessionStarted {
    /// Bearer token addressing the new session.
    pub token: Uuid,
}

/// Response body for `GET /session`.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub onboarding_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/session
///
/// Start a fresh anonymous session and return its bearer token.
pub async fn start_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<DataResponse<SessionStarted>>) {
    let token = state.sessions.create().await;

    tracing::debug!(%token, "Session started");

    (
        StatusCode::CREATED,
        Json(DataResponse {
            data: SessionStarted { token },
        }),
    )
}

/// GET /api/v1/session
///
/// Snapshot of the session: onboarding flag and the signed-in identity.
pub async fn get_session(
    user: SessionUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SessionSnapshot>>> {
    let snapshot = state
        .sessions
        .with_state(user.token, |s| SessionSnapshot {
            onboarding_complete: s.onboarding_complete(),
            identity: s.identity().cloned(),
        })
        .await
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unknown session".into())))?;

    Ok(Json(DataResponse { data: snapshot }))
}

/// POST /api/v1/session/onboarding/complete
///
/// Mark the first-run introduction as finished for this session. Until
/// this is called, the navigation policy redirects everything to the
/// onboarding route. Idempotent. Returns 204 No Content.
pub async fn complete_onboarding(
    user: SessionUser,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    state
        .sessions
        .with_state_mut(user.token, |s| s.complete_onboarding())
        .await
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unknown session".into())))?;

    Ok(StatusCode::NO_CONTENT)
}
