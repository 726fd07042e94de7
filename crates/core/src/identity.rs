//! Identities and roles.
//!
//! A [`Role`] is a closed two-variant enum: the route policy and the
//! booking engine branch on it exhaustively, and no third role is
//! representable. Role is fixed for the lifetime of a session; only the
//! email suffix check at sign-in/sign-up/reset time consults it (profile
//! edits afterwards are not re-validated).

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The two account roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Searches rooms and books study slots.
    Student,
    /// Monitors room occupancy and revokes allocations.
    Assigner,
}

impl Role {
    /// The email suffix an account of this role must sign in with.
    pub fn email_suffix(self) -> &'static str {
        match self {
            Role::Student => "@university.edu",
            Role::Assigner => "@admin.edu",
        }
    }
}

/// An authenticated user for the duration of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    /// `#`-prefixed student number. Always `None` for assigners.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
}

impl Identity {
    /// Build an identity for a freshly signed-in/up user. Students are
    /// issued a generated student number; assigners get none.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        let student_id = match role {
            Role::Student => Some(generate_student_id()),
            Role::Assigner => None,
        };
        Self {
            name: name.into(),
            email: email.into(),
            role,
            profile_pic: None,
            student_id,
        }
    }
}

/// Partial profile edit, merged shallowly into the current identity.
///
/// There is intentionally no `role` field: role is immutable after the
/// identity is created.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_pic: Option<String>,
}

/// Generate a display student number like `#82910442`.
pub fn generate_student_id() -> String {
    let n: u32 = rand::rng().random_range(10_000_000..100_000_000);
    format!("#{n}")
}
