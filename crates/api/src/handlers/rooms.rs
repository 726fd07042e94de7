//! Handlers for the `/rooms` resource (search, detail, preflight, tips).

use axum::extract::{Path, Query, State};
use axum::Json;
use campusease_core::booking;
use campusease_core::error::CoreError;
use campusease_core::room::{Room, SearchFilters, BUILDINGS};
use serde::Serialize;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStudent;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::tips::{fetch_tip, spawn_prefetch};

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Booking preflight for the detail screen's button state.
#[derive(Debug, Serialize)]
pub struct EligibilityResponse {
    pub double_booked: bool,
    pub limit_reached: bool,
    pub can_reserve: bool,
}

/// Response body for `GET /rooms/{id}/tip`.
#[derive(Debug, Serialize)]
pub struct TipResponse {
    pub tip: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/rooms
///
/// Catalog search. `building` empty or absent matches any building;
/// `time_slot` is accepted but does not restrict results.
pub async fn list_rooms(
    _student: RequireStudent,
    State(state): State<AppState>,
    Query(filters): Query<SearchFilters>,
) -> Json<DataResponse<Vec<Room>>> {
    let rooms: Vec<Room> = state
        .catalog
        .search(&filters)
        .into_iter()
        .cloned()
        .collect();

    Json(DataResponse { data: rooms })
}

/// GET /api/v1/rooms/buildings
///
/// Building names for the filter screen.
pub async fn buildings(_student: RequireStudent) -> Json<DataResponse<Vec<&'static str>>> {
    Json(DataResponse {
        data: BUILDINGS.to_vec(),
    })
}

/// GET /api/v1/rooms/{id}
///
/// Room detail. Opening a detail view also kicks off the fire-and-forget
/// study-tip prefetch for this session; a previously opened view's fetch
/// is cancelled and its result discarded.
pub async fn get_room(
    student: RequireStudent,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Room>>> {
    let room = state.catalog.get(&id)?.clone();

    spawn_prefetch(&state, student.token, &room).await;

    Ok(Json(DataResponse { data: room }))
}

/// GET /api/v1/rooms/{id}/eligibility
///
/// Preflight flags for the requesting student against this room.
pub async fn eligibility(
    student: RequireStudent,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<EligibilityResponse>>> {
    // 404 for rooms outside the catalog, like the detail screen.
    state.catalog.get(&id)?;

    let flags = state
        .sessions
        .with_state(student.token, |s| booking::check(&s.reservations, &id))
        .await
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unknown session".into())))?;

    Ok(Json(DataResponse {
        data: EligibilityResponse {
            double_booked: flags.double_booked,
            limit_reached: flags.limit_reached,
            can_reserve: flags.can_reserve(),
        },
    }))
}

/// GET /api/v1/rooms/{id}/tip
///
/// The study tip for this room's building. Serves the prefetched text
/// when the detail-view task has finished, otherwise fetches inline under
/// the configured deadline. Never errors: every failure mode degrades to
/// the fixed fallback copy.
pub async fn tip(
    student: RequireStudent,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<TipResponse>>> {
    let room = state.catalog.get(&id)?.clone();

    let tip = match state.sessions.cached_tip(student.token, &room.id).await {
        Some(text) => text,
        None => {
            let timeout = Duration::from_secs(state.config.tip.timeout_secs);
            fetch_tip(state.tips.as_ref(), &room.building, timeout).await
        }
    };

    Ok(Json(DataResponse {
        data: TipResponse { tip },
    }))
}
