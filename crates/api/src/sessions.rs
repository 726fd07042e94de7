//! In-memory session registry.
//!
//! Each client session owns one [`SessionState`] (identity, onboarding
//! flag, reservation store) plus the cached study-tip prefetch for the
//! room detail view it most recently opened. Sessions are addressed by an
//! opaque bearer token handed out at creation.
//!
//! Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
//! shared across the application.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use campusease_core::identity::Identity;
use campusease_core::reservation::Reservation;
use campusease_core::session::SessionState;

/// Prefetch state for the most recently opened room detail view.
///
/// Opening a different detail view cancels the previous token, so a slow
/// fetch for a view the user already left is discarded instead of applied.
struct TipPrefetch {
    room_id: String,
    token: CancellationToken,
    text: Option<String>,
}

/// One client session.
pub struct SessionRecord {
    pub state: SessionState,
    tip: Option<TipPrefetch>,
}

/// Registry of all live sessions.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, SessionRecord>>,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Start a fresh anonymous session and return its bearer token.
    pub async fn create(&self) -> Uuid {
        let token = Uuid::new_v4();
        let record = SessionRecord {
            state: SessionState::new(),
            tip: None,
        };
        self.sessions.write().await.insert(token, record);
        token
    }

    /// Run a closure against a session's state, if the token is known.
    pub async fn with_state<R>(
        &self,
        token: Uuid,
        f: impl FnOnce(&SessionState) -> R,
    ) -> Option<R> {
        self.sessions.read().await.get(&token).map(|r| f(&r.state))
    }

    /// Run a mutating closure against a session's state, if the token is
    /// known.
    pub async fn with_state_mut<R>(
        &self,
        token: Uuid,
        f: impl FnOnce(&mut SessionState) -> R,
    ) -> Option<R> {
        self.sessions
            .write()
            .await
            .get_mut(&token)
            .map(|r| f(&mut r.state))
    }

    // -----------------------------------------------------------------------
    // Occupancy (assigner views)
    // -----------------------------------------------------------------------

    /// Snapshot every upcoming reservation across all sessions, paired
    /// with the identity holding it at scan time.
    pub async fn upcoming_allocations(&self) -> Vec<(Option<Identity>, Reservation)> {
        let sessions = self.sessions.read().await;
        let mut out = Vec::new();
        for record in sessions.values() {
            let holder = record.state.identity().cloned();
            for reservation in record.state.reservations.upcoming() {
                out.push((holder.clone(), reservation.clone()));
            }
        }
        out
    }

    /// Cancel every upcoming reservation on a room, across all sessions.
    /// Returns the number of reservations transitioned; zero is a no-op,
    /// not an error.
    pub async fn revoke_room(&self, room_id: &str) -> usize {
        let mut sessions = self.sessions.write().await;
        let mut revoked = 0;
        for record in sessions.values_mut() {
            let ids: Vec<Uuid> = record
                .state
                .reservations
                .upcoming()
                .filter(|r| r.room.id == room_id)
                .map(|r| r.id)
                .collect();
            for id in ids {
                if record.state.reservations.cancel(id) {
                    revoked += 1;
                }
            }
        }
        revoked
    }

    // -----------------------------------------------------------------------
    // Tip prefetch cache
    // -----------------------------------------------------------------------

    /// Begin a tip prefetch for a room detail view. Any prefetch for a
    /// previously opened view is cancelled and its (eventual) result
    /// discarded. Returns the fresh cancellation token, or `None` if the
    /// session is unknown.
    pub async fn begin_tip_prefetch(
        &self,
        token: Uuid,
        room_id: String,
    ) -> Option<CancellationToken> {
        let mut sessions = self.sessions.write().await;
        let record = sessions.get_mut(&token)?;
        if let Some(previous) = record.tip.take() {
            previous.token.cancel();
        }
        let cancel = CancellationToken::new();
        record.tip = Some(TipPrefetch {
            room_id,
            token: cancel.clone(),
            text: None,
        });
        Some(cancel)
    }

    /// Store a finished prefetch result. Applied only if the session still
    /// shows the same room and the prefetch was not cancelled meanwhile.
    pub async fn store_tip(
        &self,
        token: Uuid,
        room_id: &str,
        cancel: &CancellationToken,
        text: String,
    ) {
        let mut sessions = self.sessions.write().await;
        let Some(record) = sessions.get_mut(&token) else {
            return;
        };
        if let Some(tip) = record.tip.as_mut() {
            if tip.room_id == room_id && !cancel.is_cancelled() {
                tip.text = Some(text);
            }
        }
    }

    /// The cached tip for a room, if a prefetch for it has completed.
    pub async fn cached_tip(&self, token: Uuid, room_id: &str) -> Option<String> {
        self.sessions
            .read()
            .await
            .get(&token)?
            .tip
            .as_ref()
            .filter(|tip| tip.room_id == room_id)
            .and_then(|tip| tip.text.clone())
    }
}
