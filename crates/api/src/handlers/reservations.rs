//! Handlers for the `/reservations` resource (book, list, cancel).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use campusease_core::booking::{self, BookingOutcome, DOUBLE_BOOKED_MESSAGE};
use campusease_core::error::CoreError;
use campusease_core::reservation::Reservation;
use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStudent;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /reservations`.
#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub room_id: String,
}

/// Booking result. `double_booked` is a flagged warning, not an error:
/// nothing was created, and the client decides how to present it.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BookingResponse {
    Accepted { reservation: Reservation },
    DoubleBooked { message: &'static str },
}

/// Which slice of the log `GET /reservations` returns.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationView {
    #[default]
    Upcoming,
    History,
}

/// Query parameters for `GET /reservations`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub view: ReservationView,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/reservations
///
/// Evaluate the booking policy and, when eligible, append a reservation
/// with a two-hour window from now. Responses:
///
/// - `201` accepted, with the created reservation
/// - `200` double-booked warning, nothing created
/// - `409 LIMIT_REACHED` when the active-reservation limit is hit
pub async fn create(
    student: RequireStudent,
    State(state): State<AppState>,
    Json(input): Json<CreateReservationRequest>,
) -> AppResult<Response> {
    // 1. Snapshot the room; unknown ids are a 404, not a policy outcome.
    let room = state.catalog.get(&input.room_id)?.clone();

    // 2. Single synchronous policy decision against this session's store.
    let outcome = state
        .sessions
        .with_state_mut(student.token, |s| {
            booking::reserve(&mut s.reservations, &room, Local::now())
        })
        .await
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unknown session".into())))??;

    // 3. Report it.
    let response = match outcome {
        BookingOutcome::Accepted(reservation) => {
            tracing::info!(room_id = %room.id, reservation_id = %reservation.id, "Reservation created");
            (
                StatusCode::CREATED,
                Json(DataResponse {
                    data: BookingResponse::Accepted { reservation },
                }),
            )
                .into_response()
        }
        BookingOutcome::DoubleBooked => {
            tracing::debug!(room_id = %room.id, "Double-booking flagged");
            Json(DataResponse {
                data: BookingResponse::DoubleBooked {
                    message: DOUBLE_BOOKED_MESSAGE,
                },
            })
            .into_response()
        }
    };
    Ok(response)
}

/// GET /api/v1/reservations?view=upcoming|history
///
/// The session's reservation log, newest first. `upcoming` (default)
/// lists active bookings; `history` lists everything else.
pub async fn list(
    student: RequireStudent,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<Reservation>>>> {
    let reservations = state
        .sessions
        .with_state(student.token, |s| match params.view {
            ReservationView::Upcoming => s.reservations.upcoming().cloned().collect::<Vec<_>>(),
            ReservationView::History => s.reservations.history().cloned().collect::<Vec<_>>(),
        })
        .await
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unknown session".into())))?;

    Ok(Json(DataResponse { data: reservations }))
}

/// POST /api/v1/reservations/{id}/cancel
///
/// Transition a reservation to cancelled. Unknown, malformed, and
/// already-cancelled ids are all no-ops. Returns 204 No Content.
pub async fn cancel(
    student: RequireStudent,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    if let Ok(id) = Uuid::parse_str(&id) {
        let cancelled = state
            .sessions
            .with_state_mut(student.token, |s| s.reservations.cancel(id))
            .await
            .unwrap_or(false);
        if cancelled {
            tracing::info!(reservation_id = %id, "Reservation cancelled");
        }
    }
    StatusCode::NO_CONTENT
}
