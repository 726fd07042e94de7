//! Domain error taxonomy.
//!
//! No error in this system is fatal: every variant degrades to an inline
//! form message, a disabled action, or an empty state at the presentation
//! layer. Note that a double-booked room is deliberately *not* an error --
//! it is a flagged booking outcome (see [`crate::booking::BookingOutcome`]).

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Entity lookup failed. Rendered as an empty state, never a crash.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A form failed the credential-format policy or a required-field
    /// check. The message is the exact user-facing copy for the form.
    #[error("{0}")]
    Validation(String),

    /// The requester already holds the maximum number of upcoming
    /// reservations. A hard rejection, unlike double-booking.
    #[error("You've reached the maximum of {max} active reservations.")]
    LimitReached { max: usize },

    /// No session, or the session token is unknown.
    #[error("{0}")]
    Unauthorized(String),

    /// The session's role may not perform this operation.
    #[error("{0}")]
    Forbidden(String),
}

/// Convenience alias used throughout the core crate.
pub type CoreResult<T> = Result<T, CoreError>;
