//! Auth-session store for the current app user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in an `RwSignal` provided via context. Route guarding and
//! identity-aware screens read snapshots; only the session controller in
//! `net::auth_client` writes, which is what keeps UI-triggered and
//! event-triggered updates from racing.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Session, User};

/// Authentication state: the current session, its derived user, and the
/// one-time startup latch.
///
/// `user` is present exactly when `session` is; the two are only ever
/// replaced together through [`SessionState::apply`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub user: Option<User>,
    pub initialized: bool,
}

impl SessionState {
    /// Replace the session and its derived user in one step.
    pub(crate) fn apply(&mut self, session: Option<Session>) {
        self.user = session.as_ref().map(|s| s.user.clone());
        self.session = session;
    }

    /// Latch the startup flag. Transitions false to true once and never back.
    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    /// Whether a session is currently present.
    pub fn signed_in(&self) -> bool {
        self.session.is_some()
    }
}
