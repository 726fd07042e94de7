//! Handlers for the `/auth` resource (sign-in, sign-up, reset, logout).
//!
//! There is no real authentication here: any submission that passes the
//! credential-format policy yields an identity on the session. Passwords
//! are checked for presence (and confirmation equality at sign-up) and
//! then discarded -- nothing is ever stored or verified against a store.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use campusease_core::credentials;
use campusease_core::error::CoreError;
use campusease_core::identity::{Identity, Role};
use campusease_core::routing;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/sign-in`.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Request body for `POST /auth/sign-up`.
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

/// Request body for `POST /auth/forgot-password`.
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
    pub role: Role,
}

/// Successful sign-in/sign-up response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub identity: Identity,
    /// The role's landing route, e.g. `/assigner-dashboard`.
    pub landing: &'static str,
}

/// Response body for `POST /auth/forgot-password`.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/sign-in
///
/// Install an identity on the session if the submission passes the
/// credential-format policy for the chosen role.
pub async fn sign_in(
    user: SessionUser,
    State(state): State<AppState>,
    Json(input): Json<SignInRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    // 1. Credential-format policy (field presence, then role suffix).
    credentials::validate_sign_in(&input.email, &input.password, input.role)?;

    // 2. Build the identity. Students are issued a generated number.
    let identity = Identity::new(
        display_name_from_email(&input.email),
        input.email.clone(),
        input.role,
    );

    // 3. Install it on the session.
    install_identity(&state, &user, identity.clone()).await?;

    tracing::info!(email = %identity.email, role = ?identity.role, "Signed in");

    Ok(Json(DataResponse {
        data: auth_response(identity),
    }))
}

/// POST /api/v1/auth/sign-up
///
/// Same flow as sign-in plus the name field and password confirmation.
pub async fn sign_up(
    user: SessionUser,
    State(state): State<AppState>,
    Json(input): Json<SignUpRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<AuthResponse>>)> {
    // 1. Credential-format policy (fields, suffix, then password match).
    credentials::validate_sign_up(
        &input.name,
        &input.email,
        &input.password,
        &input.confirm_password,
        input.role,
    )?;

    // 2. Build and install the identity.
    let identity = Identity::new(input.name, input.email, input.role);
    install_identity(&state, &user, identity.clone()).await?;

    tracing::info!(email = %identity.email, role = ?identity.role, "Account created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: auth_response(identity),
        }),
    ))
}

/// POST /api/v1/auth/forgot-password
///
/// Validate the address for the chosen role and pretend to send reset
/// instructions. Returns 202 Accepted.
pub async fn forgot_password(
    _user: SessionUser,
    Json(input): Json<ForgotPasswordRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<ResetResponse>>)> {
    credentials::validate_reset(&input.email, input.role)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(DataResponse {
            data: ResetResponse {
                message: format!(
                    "Password reset instructions have been sent to {}.",
                    input.email
                ),
            },
        }),
    ))
}

/// POST /api/v1/auth/logout
///
/// Clear the session's identity. The reservation log survives, as does
/// the onboarding flag. Returns 204 No Content.
pub async fn logout(user: SessionUser, State(state): State<AppState>) -> AppResult<StatusCode> {
    state
        .sessions
        .with_state_mut(user.token, |s| s.sign_out())
        .await
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unknown session".into())))?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn install_identity(
    state: &AppState,
    user: &SessionUser,
    identity: Identity,
) -> AppResult<()> {
    state
        .sessions
        .with_state_mut(user.token, |s| s.sign_in(identity))
        .await
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unknown session".into())))
}

fn auth_response(identity: Identity) -> AuthResponse {
    let landing = routing::default_landing(Some(identity.role)).path();
    AuthResponse { identity, landing }
}

/// Sign-in has no name field; derive a display name from the email local
/// part (`j.doe@...` becomes `J Doe`).
fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
