pub mod allocations;
pub mod auth;
pub mod health;
pub mod navigation;
pub mod profile;
pub mod reservations;
pub mod rooms;
pub mod session;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /session                                  start session (public)
/// /session                                  session snapshot
/// /session/onboarding/complete              finish first-run introduction
///
/// /navigation/decision                      route access policy verdict (public)
///
/// /auth/sign-in                             sign in
/// /auth/sign-up                             create account
/// /auth/forgot-password                     simulated reset send
/// /auth/logout                              clear identity
///
/// /profile                                  get, patch (signed-in)
///
/// /rooms                                    filtered search        (student)
/// /rooms/buildings                          building list          (student)
/// /rooms/{id}                               detail + tip prefetch  (student)
/// /rooms/{id}/eligibility                   booking preflight      (student)
/// /rooms/{id}/tip                           study tip              (student)
///
/// /reservations                             book, list             (student)
/// /reservations/{id}/cancel                 idempotent cancel      (student)
///
/// /allocations                              occupancy board        (assigner)
/// /allocations/{room_id}                    allocation detail      (assigner)
/// /allocations/{room_id}/revoke             revoke allocation      (assigner)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/session", session::router())
        .nest("/navigation", navigation::router())
        .nest("/auth", auth::router())
        .nest("/profile", profile::router())
        .nest("/rooms", rooms::router())
        .nest("/reservations", reservations::router())
        .nest("/allocations", allocations::router())
}
