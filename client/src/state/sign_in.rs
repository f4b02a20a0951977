//! Sign-in form state machine.
//!
//! DESIGN
//! ======
//! `SignInForm` holds the transient form fields plus the submit phase.
//! Submission is a guarded `Idle -> Submitting` transition: `begin` either
//! accepts an attempt and snapshots what to send, or rejects it without any
//! side effect. `settle` returns to `Idle` and records the outcome.
//!
//! The machine is plain data so it can live inside a `RwSignal` in the page
//! and inside a `RefCell` in tests; `FormCell` abstracts over both.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::identity::{AuthResult, Credentials, FederatedProvider, Session};

/// Submit phase of the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// How the user asked to sign in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInMethod {
    Credentials,
    Federated(FederatedProvider),
}

/// An accepted attempt, with the values to hand to the provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attempt {
    Credentials(Credentials),
    Federated(FederatedProvider),
}

/// Why `begin` refused to start an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a sign-in attempt is already in progress")]
    InFlight,
    #[error("email is required")]
    MissingEmail,
    #[error("password is required")]
    MissingPassword,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    /// Message from the last failed attempt, shown verbatim.
    pub error: Option<String>,
    phase: Phase,
}

impl SignInForm {
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// The error to display, if any. An empty provider message shows nothing.
    #[must_use]
    pub fn visible_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }

    /// Try to start an attempt.
    ///
    /// Credential attempts need both fields non-empty; no format checks are
    /// made. An accepted attempt clears the previous error.
    ///
    /// # Errors
    ///
    /// Returns `SubmitRejected` when an attempt is already pending or a
    /// required field is empty. The form is left untouched.
    pub fn begin(&mut self, method: SignInMethod) -> Result<Attempt, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        let attempt = match method {
            SignInMethod::Credentials => {
                if self.email.is_empty() {
                    return Err(SubmitRejected::MissingEmail);
                }
                if self.password.is_empty() {
                    return Err(SubmitRejected::MissingPassword);
                }
                Attempt::Credentials(Credentials::new(self.email.clone(), self.password.clone()))
            }
            SignInMethod::Federated(provider) => Attempt::Federated(provider),
        };
        self.error = None;
        self.phase = Phase::Submitting;
        Ok(attempt)
    }

    /// Finish the pending attempt. Returns the session on success; on
    /// failure stores the provider's message in `error`.
    pub fn settle(&mut self, result: AuthResult) -> Option<Session> {
        self.phase = Phase::Idle;
        match result {
            Ok(session) => Some(session),
            Err(err) => {
                self.error = Some(err.message().to_owned());
                None
            }
        }
    }
}

/// Mutable access to a `SignInForm` that may outlive the view owning it.
pub trait FormCell {
    /// Run `f` against the form. Returns `None` if the form is gone.
    fn with_form<R>(&self, f: impl FnOnce(&mut SignInForm) -> R) -> Option<R>;
}

impl FormCell for RwSignal<SignInForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut SignInForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}
