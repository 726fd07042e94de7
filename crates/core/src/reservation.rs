//! Reservation records and the per-session reservation store.
//!
//! The store is an append-only log: records are never removed, only
//! status-transitioned. The single mutator is [`ReservationStore::cancel`],
//! which is a no-op for unknown ids and for reservations that are already
//! past `Upcoming`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::room::Room;

/// Lifecycle status of a reservation.
///
/// `Upcoming -> Cancelled` is the only transition a user can trigger.
/// `Completed` exists for history rendering; nothing in this system
/// performs time-based expiry, so nothing transitions into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Upcoming,
    Completed,
    Cancelled,
}

/// A booked time window against a specific room.
///
/// The room is snapshotted by value at booking time, so later catalog
/// changes cannot retroactively alter reservation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub room: Room,
    /// Display date label, e.g. `"Today"`.
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: ReservationStatus,
}

/// Append-only reservation log for one session, newest first.
#[derive(Debug, Default, Clone)]
pub struct ReservationStore {
    items: Vec<Reservation>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted reservation. Ids are generated (UUID v4) by the
    /// booking engine; the store asserts the per-session uniqueness
    /// invariant rather than enforcing it.
    pub fn append(&mut self, reservation: Reservation) {
        debug_assert!(
            self.find(reservation.id).is_none(),
            "duplicate reservation id {}",
            reservation.id
        );
        self.items.insert(0, reservation);
    }

    /// Transition `Upcoming -> Cancelled`. Unknown ids and reservations
    /// that are not upcoming are left untouched; returns whether a
    /// transition happened.
    pub fn cancel(&mut self, id: Uuid) -> bool {
        match self
            .items
            .iter_mut()
            .find(|r| r.id == id && r.status == ReservationStatus::Upcoming)
        {
            Some(r) => {
                r.status = ReservationStatus::Cancelled;
                true
            }
            None => false,
        }
    }

    pub fn find(&self, id: Uuid) -> Option<&Reservation> {
        self.items.iter().find(|r| r.id == id)
    }

    /// Every record, newest first.
    pub fn all(&self) -> &[Reservation] {
        &self.items
    }

    /// Reservations still in the `Upcoming` state.
    pub fn upcoming(&self) -> impl Iterator<Item = &Reservation> {
        self.items
            .iter()
            .filter(|r| r.status == ReservationStatus::Upcoming)
    }

    /// Everything that is no longer upcoming (cancelled or completed).
    pub fn history(&self) -> impl Iterator<Item = &Reservation> {
        self.items
            .iter()
            .filter(|r| r.status != ReservationStatus::Upcoming)
    }

    pub fn active_count(&self) -> usize {
        self.upcoming().count()
    }

    /// Whether an upcoming reservation already references this room.
    pub fn has_upcoming_for(&self, room_id: &str) -> bool {
        self.upcoming().any(|r| r.room.id == room_id)
    }
}
