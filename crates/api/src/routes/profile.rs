//! Route definitions for the `/profile` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profile`.
///
/// ```text
/// GET   /  -> get_profile
/// PATCH /  -> update_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(profile::get_profile).patch(profile::update_profile),
    )
}
