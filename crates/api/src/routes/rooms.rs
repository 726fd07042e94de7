//! Route definitions for the `/rooms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::rooms;
use crate::state::AppState;

/// Routes mounted at `/rooms`. All student-only.
///
/// ```text
/// GET /                  -> list_rooms (filtered search)
/// GET /buildings         -> buildings
/// GET /{id}              -> get_room (kicks off tip prefetch)
/// GET /{id}/eligibility  -> eligibility (booking preflight)
/// GET /{id}/tip          -> tip
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rooms::list_rooms))
        .route("/buildings", get(rooms::buildings))
        .route("/{id}", get(rooms::get_room))
        .route("/{id}/eligibility", get(rooms::eligibility))
        .route("/{id}/tip", get(rooms::tip))
}
