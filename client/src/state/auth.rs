//! Signed-in session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` by the app root. The sign-in page
//! records the session on success; the home page reads it. Nothing is
//! persisted, so a reload starts signed out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::identity::Session;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Email of the signed-in user, falling back to the provider user id.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.session
            .as_ref()
            .map(|s| s.email.clone().unwrap_or_else(|| s.user_id.clone()))
    }

    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn sign_out(&mut self) {
        self.session = None;
    }
}
