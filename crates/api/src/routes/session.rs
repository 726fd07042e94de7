//! Route definitions for the `/session` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// Routes mounted at `/session`.
///
/// ```text
/// POST /                      -> start_session (public)
/// GET  /                      -> get_session
/// POST /onboarding/complete   -> complete_onboarding
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(session::start_session).get(session::get_session))
        .route("/onboarding/complete", post(session::complete_onboarding))
}
