//! CampusEase domain core.
//!
//! Pure policy and state types for the classroom-reservation service:
//! credential-format rules, the route access policy, the booking policy
//! engine, and the per-session reservation store. This crate has no
//! framework or runtime dependencies so every decision function can be
//! unit-tested in isolation; the HTTP layer lives in `campusease-api`.

pub mod booking;
pub mod credentials;
pub mod error;
pub mod identity;
pub mod reservation;
pub mod room;
pub mod routing;
pub mod session;
pub mod tips;
