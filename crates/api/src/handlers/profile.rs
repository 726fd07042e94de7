//! Handlers for the `/profile` resource.
//!
//! Profile edits merge shallowly into the current identity. Role is not
//! editable, and an edited email is not re-validated against the role
//! suffix -- eligibility binds at sign-in time only.

use axum::extract::State;
use axum::Json;
use campusease_core::error::CoreError;
use campusease_core::identity::{Identity, ProfileUpdate};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn get_profile(user: SessionUser) -> AppResult<Json<DataResponse<Identity>>> {
    let identity = user
        .identity
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not signed in".into())))?;

    Ok(Json(DataResponse { data: identity }))
}

/// PATCH /api/v1/profile
///
/// Shallow-merge the provided fields into the current identity and return
/// the merged result.
pub async fn update_profile(
    user: SessionUser,
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> AppResult<Json<DataResponse<Identity>>> {
    let merged = state
        .sessions
        .with_state_mut(user.token, |s| s.update_profile(update).map(Identity::clone))
        .await
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unknown session".into())))??;

    tracing::debug!(email = %merged.email, "Profile updated");

    Ok(Json(DataResponse { data: merged }))
}
