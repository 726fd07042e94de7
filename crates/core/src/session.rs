//! Session state.
//!
//! One explicitly-owned record per client session: the zero-or-one
//! signed-in identity, the first-run introduction flag, and the session's
//! reservation store. Only the mutators below change it; routing decisions
//! live in [`crate::routing`] and consume this state read-only.

use crate::error::{CoreError, CoreResult};
use crate::identity::{Identity, ProfileUpdate};
use crate::reservation::ReservationStore;
use crate::routing::NavContext;

#[derive(Debug, Default, Clone)]
pub struct SessionState {
    identity: Option<Identity>,
    onboarding_complete: bool,
    pub reservations: ReservationStore,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn onboarding_complete(&self) -> bool {
        self.onboarding_complete
    }

    /// The read-only view the route access policy consumes.
    pub fn nav_context(&self) -> NavContext {
        NavContext {
            onboarding_complete: self.onboarding_complete,
            role: self.identity.as_ref().map(|i| i.role),
        }
    }

    /// Install the identity produced by a sign-in or sign-up.
    pub fn sign_in(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    /// Shallow-merge a partial profile edit into the current identity.
    /// Role is untouched by construction ([`ProfileUpdate`] has no role
    /// field), and the new email is not suffix-checked again.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> CoreResult<&Identity> {
        let identity = self
            .identity
            .as_mut()
            .ok_or_else(|| CoreError::Unauthorized("Not signed in".to_string()))?;
        if let Some(name) = update.name {
            identity.name = name;
        }
        if let Some(email) = update.email {
            identity.email = email;
        }
        if let Some(profile_pic) = update.profile_pic {
            identity.profile_pic = Some(profile_pic);
        }
        Ok(&*identity)
    }

    /// Drop the identity. The reservation log survives the sign-out.
    pub fn sign_out(&mut self) {
        self.identity = None;
    }

    pub fn complete_onboarding(&mut self) {
        self.onboarding_complete = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Role;

    fn student_session() -> SessionState {
        let mut session = SessionState::new();
        session.complete_onboarding();
        session.sign_in(Identity::new("Jane Doe", "j.doe@university.edu", Role::Student));
        session
    }

    #[test]
    fn profile_update_merges_shallowly() {
        let mut session = student_session();
        let updated = session
            .update_profile(ProfileUpdate {
                name: Some("Jane Q. Doe".to_string()),
                ..ProfileUpdate::default()
            })
            .unwrap();

        assert_eq!(updated.name, "Jane Q. Doe");
        // Untouched fields survive the merge.
        assert_eq!(updated.email, "j.doe@university.edu");
        assert_eq!(updated.role, Role::Student);
    }

    #[test]
    fn profile_email_edit_is_not_revalidated() {
        // Suffix eligibility binds at sign-in time only.
        let mut session = student_session();
        let updated = session
            .update_profile(ProfileUpdate {
                email: Some("jane@elsewhere.org".to_string()),
                ..ProfileUpdate::default()
            })
            .unwrap();
        assert_eq!(updated.email, "jane@elsewhere.org");
    }

    #[test]
    fn update_without_identity_is_unauthorized() {
        let mut session = SessionState::new();
        let err = session.update_profile(ProfileUpdate::default()).unwrap_err();
        assert!(matches!(err, CoreError::Unauthorized(_)));
    }

    #[test]
    fn sign_out_keeps_reservation_history() {
        let mut session = student_session();
        let catalog = crate::room::RoomCatalog::builtin();
        let now = chrono::Local::now();
        crate::booking::reserve(&mut session.reservations, catalog.get("1").unwrap(), now)
            .unwrap();

        session.sign_out();
        assert!(session.identity().is_none());
        assert_eq!(session.reservations.active_count(), 1);
    }

    #[test]
    fn nav_context_tracks_state() {
        let mut session = SessionState::new();
        let ctx = session.nav_context();
        assert!(!ctx.onboarding_complete);
        assert!(ctx.role.is_none());

        session.complete_onboarding();
        session.sign_in(Identity::new("Pat", "pat@admin.edu", Role::Assigner));
        let ctx = session.nav_context();
        assert!(ctx.onboarding_complete);
        assert_eq!(ctx.role, Some(Role::Assigner));
    }
}
