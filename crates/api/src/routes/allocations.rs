//! Route definitions for the `/allocations` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::allocations;
use crate::state::AppState;

/// Routes mounted at `/allocations`. All assigner-only.
///
/// ```text
/// GET  /                    -> list (occupancy board)
/// GET  /{room_id}           -> get (allocation detail)
/// POST /{room_id}/revoke    -> revoke (cancel across sessions)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(allocations::list))
        .route("/{room_id}", get(allocations::get))
        .route("/{room_id}/revoke", post(allocations::revoke))
}
