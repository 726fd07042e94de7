//! Booking policy engine.
//!
//! Decides whether a student may create a reservation for a room, given
//! their session's current store. Two independent conditions can block the
//! action:
//!
//! - double-booking: an upcoming reservation on the same room already
//!   exists. This is a *flagged outcome*, not an error -- the client shows
//!   a warning state, and nothing is created.
//! - the active-reservation limit: a hard rejection
//!   ([`CoreError::LimitReached`]).
//!
//! When both hold, double-booking takes precedence in the reported outcome.

use chrono::{DateTime, Duration, Local};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::reservation::{Reservation, ReservationStatus, ReservationStore};
use crate::room::Room;

/// Maximum simultaneous upcoming reservations per student.
pub const MAX_ACTIVE_RESERVATIONS: usize = 2;

/// Length of every booked window.
pub const RESERVATION_WINDOW_HOURS: i64 = 2;

/// Warning copy for a double-booked room.
pub const DOUBLE_BOOKED_MESSAGE: &str = "You already have an active reservation for this room.";

/// Preflight flags for a (requester, room) pair. Both conditions are
/// reported independently so the client can render the exact button state
/// (warning-styled for double-booked, disabled only on a bare limit).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Eligibility {
    pub double_booked: bool,
    pub limit_reached: bool,
}

impl Eligibility {
    pub fn can_reserve(&self) -> bool {
        !self.double_booked && !self.limit_reached
    }
}

/// Result of an accepted booking attempt.
#[derive(Debug, Clone)]
pub enum BookingOutcome {
    /// A reservation was created and appended to the store.
    Accepted(Reservation),
    /// The room is already booked by this session; nothing was created.
    DoubleBooked,
}

/// Compute the preflight flags without mutating anything.
pub fn check(store: &ReservationStore, room_id: &str) -> Eligibility {
    Eligibility {
        double_booked: store.has_upcoming_for(room_id),
        limit_reached: store.active_count() >= MAX_ACTIVE_RESERVATIONS,
    }
}

/// Evaluate a booking request and, if eligible, append a new reservation
/// with a fixed two-hour window starting at `now`.
pub fn reserve(
    store: &mut ReservationStore,
    room: &Room,
    now: DateTime<Local>,
) -> CoreResult<BookingOutcome> {
    let eligibility = check(store, &room.id);

    // Double-booking wins over the limit in the reported outcome.
    if eligibility.double_booked {
        return Ok(BookingOutcome::DoubleBooked);
    }
    if eligibility.limit_reached {
        return Err(CoreError::LimitReached {
            max: MAX_ACTIVE_RESERVATIONS,
        });
    }

    let end = now + Duration::hours(RESERVATION_WINDOW_HOURS);
    let reservation = Reservation {
        id: Uuid::new_v4(),
        room: room.clone(),
        date: "Today".to_string(),
        start_time: format_clock(now),
        end_time: format_clock(end),
        status: ReservationStatus::Upcoming,
    };
    store.append(reservation.clone());
    Ok(BookingOutcome::Accepted(reservation))
}

/// 12-hour clock label, e.g. `"2:00 PM"`.
fn format_clock(at: DateTime<Local>) -> String {
    at.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    use crate::room::RoomCatalog;

    fn two_pm() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 9, 14, 0, 0).unwrap()
    }

    fn book(store: &mut ReservationStore, room_id: &str) -> Reservation {
        let catalog = RoomCatalog::builtin();
        match reserve(store, catalog.get(room_id).unwrap(), two_pm()).unwrap() {
            BookingOutcome::Accepted(r) => r,
            BookingOutcome::DoubleBooked => panic!("unexpected double-booking"),
        }
    }

    // -----------------------------------------------------------------------
    // Acceptance
    // -----------------------------------------------------------------------

    #[test]
    fn first_booking_is_accepted() {
        let mut store = ReservationStore::new();
        let res = book(&mut store, "1");

        assert_eq!(res.status, ReservationStatus::Upcoming);
        assert_eq!(res.room.id, "1");
        assert_eq!(res.date, "Today");
        assert_eq!(store.active_count(), 1);
    }

    #[test]
    fn window_is_two_hours_from_now() {
        let mut store = ReservationStore::new();
        let res = book(&mut store, "1");
        assert_eq!(res.start_time, "2:00 PM");
        assert_eq!(res.end_time, "4:00 PM");
    }

    #[test]
    fn accepted_ids_are_unique() {
        let mut store = ReservationStore::new();
        let a = book(&mut store, "1");
        let b = book(&mut store, "2");
        assert_ne!(a.id, b.id);
    }

    // -----------------------------------------------------------------------
    // Limit
    // -----------------------------------------------------------------------

    #[test]
    fn third_room_hits_the_limit() {
        let catalog = RoomCatalog::builtin();
        let mut store = ReservationStore::new();
        book(&mut store, "1");
        book(&mut store, "2");

        let err = reserve(&mut store, catalog.get("3").unwrap(), two_pm()).unwrap_err();
        assert_matches!(err, CoreError::LimitReached { max: 2 });
        assert_eq!(store.active_count(), 2);
    }

    #[test]
    fn cancelling_frees_a_slot() {
        let catalog = RoomCatalog::builtin();
        let mut store = ReservationStore::new();
        let first = book(&mut store, "1");
        book(&mut store, "2");
        store.cancel(first.id);

        let outcome = reserve(&mut store, catalog.get("3").unwrap(), two_pm()).unwrap();
        assert_matches!(outcome, BookingOutcome::Accepted(_));
    }

    // -----------------------------------------------------------------------
    // Double-booking
    // -----------------------------------------------------------------------

    #[test]
    fn same_room_is_flagged_not_rejected() {
        let catalog = RoomCatalog::builtin();
        let mut store = ReservationStore::new();
        book(&mut store, "1");

        let outcome = reserve(&mut store, catalog.get("1").unwrap(), two_pm()).unwrap();
        assert_matches!(outcome, BookingOutcome::DoubleBooked);
        // Nothing was created.
        assert_eq!(store.active_count(), 1);
    }

    #[test]
    fn double_booking_takes_precedence_over_limit() {
        let catalog = RoomCatalog::builtin();
        let mut store = ReservationStore::new();
        book(&mut store, "1");
        book(&mut store, "2");

        // Both conditions hold for room 1; the flagged outcome wins.
        let outcome = reserve(&mut store, catalog.get("1").unwrap(), two_pm()).unwrap();
        assert_matches!(outcome, BookingOutcome::DoubleBooked);
    }

    #[test]
    fn cancelled_reservation_does_not_count_as_double_booking() {
        let catalog = RoomCatalog::builtin();
        let mut store = ReservationStore::new();
        let first = book(&mut store, "1");
        store.cancel(first.id);

        let outcome = reserve(&mut store, catalog.get("1").unwrap(), two_pm()).unwrap();
        assert_matches!(outcome, BookingOutcome::Accepted(_));
    }

    // -----------------------------------------------------------------------
    // Preflight flags
    // -----------------------------------------------------------------------

    #[test]
    fn preflight_reports_both_conditions() {
        let mut store = ReservationStore::new();
        book(&mut store, "1");
        book(&mut store, "2");

        let on_booked_room = check(&store, "1");
        assert!(on_booked_room.double_booked);
        assert!(on_booked_room.limit_reached);
        assert!(!on_booked_room.can_reserve());

        let on_fresh_room = check(&store, "3");
        assert!(!on_fresh_room.double_booked);
        assert!(on_fresh_room.limit_reached);
    }

    #[test]
    fn preflight_on_empty_store_allows_booking() {
        let store = ReservationStore::new();
        let flags = check(&store, "1");
        assert!(flags.can_reserve());
    }
}
