//! Role-based access control extractors.
//!
//! Each extractor wraps [`SessionUser`] and rejects requests whose session
//! has not signed in (401) or whose role does not match (403). Use these in
//! route handlers to enforce the role partition at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use campusease_core::error::CoreError;
use campusease_core::identity::{Identity, Role};
use uuid::Uuid;

use super::auth::SessionUser;
use crate::error::AppError;
use crate::state::AppState;

fn require_role(user: SessionUser, role: Role, forbidden: &str) -> Result<(Uuid, Identity), AppError> {
    let identity = user.identity.ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized("Sign in required".into()))
    })?;
    if identity.role != role {
        return Err(AppError::Core(CoreError::Forbidden(forbidden.into())));
    }
    Ok((user.token, identity))
}

/// Requires a signed-in student. Rejects with 403 Forbidden otherwise.
pub struct RequireStudent {
    pub token: Uuid,
    pub identity: Identity,
}

impl FromRequestParts<AppState> for RequireStudent {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = SessionUser::from_request_parts(parts, state).await?;
        let (token, identity) = require_role(user, Role::Student, "Student access required")?;
        Ok(RequireStudent { token, identity })
    }
}

/// Requires a signed-in assigner. Rejects with 403 Forbidden otherwise.
pub struct RequireAssigner {
    pub token: Uuid,
    pub identity: Identity,
}

impl FromRequestParts<AppState> for RequireAssigner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = SessionUser::from_request_parts(parts, state).await?;
        let (token, identity) = require_role(user, Role::Assigner, "Assigner access required")?;
        Ok(RequireAssigner { token, identity })
    }
}
