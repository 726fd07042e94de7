//! Route definitions for the `/auth` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /sign-in          -> sign_in
/// POST /sign-up          -> sign_up
/// POST /forgot-password  -> forgot_password
/// POST /logout           -> logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sign-in", post(auth::sign_in))
        .route("/sign-up", post(auth::sign_up))
        .route("/forgot-password", post(auth::forgot_password))
        .route("/logout", post(auth::logout))
}
