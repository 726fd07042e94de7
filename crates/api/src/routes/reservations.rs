//! Route definitions for the `/reservations` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::reservations;
use crate::state::AppState;

/// Routes mounted at `/reservations`. All student-only.
///
/// ```text
/// POST /              -> create (booking policy decision)
/// GET  /?view=        -> list (upcoming | history)
/// POST /{id}/cancel   -> cancel (idempotent)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(reservations::create).get(reservations::list))
        .route("/{id}/cancel", post(reservations::cancel))
}
