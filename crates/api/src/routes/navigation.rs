//! Route definitions for the navigation policy endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::navigation;
use crate::state::AppState;

/// Routes mounted at `/navigation`.
///
/// ```text
/// GET /decision?route=<path>  -> decision (anonymous allowed)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/decision", get(navigation::decision))
}
