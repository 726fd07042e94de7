//! Session-token extractors for Axum handlers.
//!
//! Sessions are addressed by an opaque UUID bearer token issued by
//! `POST /session`. There is no real authentication in this system; the
//! token only names a server-side session record.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use campusease_core::error::CoreError;
use campusease_core::identity::Identity;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// A request carrying a valid session token.
///
/// Use this as an extractor parameter in any handler that requires a
/// session. The identity snapshot is `None` for sessions that have not
/// signed in yet.
#[derive(Debug, Clone)]
pub struct SessionUser {
    /// The session's bearer token.
    pub token: Uuid,
    /// The signed-in identity at extraction time, if any.
    pub identity: Option<Identity>,
}

/// Pull the bearer token string out of the `Authorization` header.
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })?;

    auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = bearer_token(parts)?;

        let token = Uuid::parse_str(raw).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid session token".into()))
        })?;

        let identity = state
            .sessions
            .with_state(token, |s| s.identity().cloned())
            .await
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unknown session".into())))?;

        Ok(SessionUser { token, identity })
    }
}

/// Like [`SessionUser`], but anonymous requests are allowed: a missing or
/// unrecognized token resolves to `None` instead of a 401. Used by the
/// navigation endpoint, which must answer for fresh clients too.
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<SessionUser>);

impl FromRequestParts<AppState> for MaybeSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeSession(
            SessionUser::from_request_parts(parts, state).await.ok(),
        ))
    }
}
