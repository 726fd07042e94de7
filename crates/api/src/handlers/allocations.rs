//! Handlers for the `/allocations` resource (assigner occupancy views).
//!
//! Occupancy is derived from reservation state, not simulated: a room is
//! `reserved` iff some session holds an upcoming reservation on it. With
//! no time-based expiry in the system there is no derived "occupied"
//! state.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campusease_core::identity::Identity;
use campusease_core::reservation::Reservation;
use campusease_core::room::Room;
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAssigner;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Occupancy state of a room on the board.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationStatus {
    Available,
    Reserved,
}

/// The student holding an allocation, as known at scan time.
#[derive(Debug, Serialize)]
pub struct AllocationHolder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The reserved window shown on the allocation detail screen.
#[derive(Debug, Serialize)]
pub struct AllocationWindow {
    pub reservation_id: Uuid,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub holder: AllocationHolder,
}

/// One row of the occupancy board.
#[derive(Debug, Serialize)]
pub struct RoomAllocation {
    pub room: Room,
    pub status: AllocationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<AllocationWindow>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/allocations
///
/// The occupancy board: every catalog room with its derived status.
pub async fn list(
    _assigner: RequireAssigner,
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<RoomAllocation>>> {
    let allocations = state.sessions.upcoming_allocations().await;

    let board = state
        .catalog
        .all()
        .iter()
        .map(|room| allocation_row(room, &allocations))
        .collect();

    Json(DataResponse { data: board })
}

/// GET /api/v1/allocations/{room_id}
///
/// Occupancy detail for one room. 404 for rooms outside the catalog.
pub async fn get(
    _assigner: RequireAssigner,
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> AppResult<Json<DataResponse<RoomAllocation>>> {
    let room = state.catalog.get(&room_id)?;
    let allocations = state.sessions.upcoming_allocations().await;

    Ok(Json(DataResponse {
        data: allocation_row(room, &allocations),
    }))
}

/// POST /api/v1/allocations/{room_id}/revoke
///
/// Cancel every upcoming reservation on the room, across all sessions.
/// A room with no upcoming reservation is a no-op. Returns 204 No Content.
pub async fn revoke(
    _assigner: RequireAssigner,
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> AppResult<StatusCode> {
    // 404 for rooms outside the catalog; revoking an unoccupied room is fine.
    state.catalog.get(&room_id)?;

    let revoked = state.sessions.revoke_room(&room_id).await;
    if revoked > 0 {
        tracing::info!(room_id, revoked, "Allocation revoked");
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build one board row from the allocation snapshot. The first upcoming
/// reservation on the room wins; the booking policy prevents a session
/// from holding more than one.
fn allocation_row(
    room: &Room,
    allocations: &[(Option<Identity>, Reservation)],
) -> RoomAllocation {
    let held = allocations.iter().find(|(_, r)| r.room.id == room.id);

    match held {
        Some((holder, reservation)) => RoomAllocation {
            room: room.clone(),
            status: AllocationStatus::Reserved,
            reservation: Some(AllocationWindow {
                reservation_id: reservation.id,
                date: reservation.date.clone(),
                start_time: reservation.start_time.clone(),
                end_time: reservation.end_time.clone(),
                holder: AllocationHolder {
                    name: holder.as_ref().map(|i| i.name.clone()),
                    student_id: holder.as_ref().and_then(|i| i.student_id.clone()),
                    email: holder.as_ref().map(|i| i.email.clone()),
                },
            }),
        },
        None => RoomAllocation {
            room: room.clone(),
            status: AllocationStatus::Available,
            reservation: None,
        },
    }
}
