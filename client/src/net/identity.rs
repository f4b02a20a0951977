//! Identity-provider capability consumed by the sign-in flow.
//!
//! DESIGN
//! ======
//! Pages never talk to a concrete provider. They receive an `AuthClient`
//! through context and only see `AuthResult`, so the provider's error format
//! stays behind the adapter and tests can substitute a fake provider.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Email/password pair passed to credential sign-in.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Third-party identity providers available for federated sign-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FederatedProvider {
    #[default]
    Google,
}

impl FederatedProvider {
    /// Provider id understood by the identity service.
    #[must_use]
    pub fn provider_id(self) -> &'static str {
        match self {
            Self::Google => "google.com",
        }
    }

    /// Human-readable provider name for button labels.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
        }
    }
}

/// Provider-issued proof of authentication. Opaque to the sign-in form.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Provider that issued the session (`"password"`, `"google.com"`).
    pub provider: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

/// The single failure kind: authentication failed, with the provider's
/// message shown verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    message: String,
}

impl AuthError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type AuthResult = Result<Session, AuthError>;

/// External authentication operations. Both calls suspend until the
/// provider settles.
#[async_trait::async_trait(?Send)]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in_with_email_password(&self, credentials: Credentials) -> AuthResult;

    async fn sign_in_with_popup(&self, provider: FederatedProvider) -> AuthResult;
}

/// Shared handle to the injected identity provider, provided via context.
#[derive(Clone)]
pub struct AuthClient(Arc<dyn IdentityProvider>);

impl AuthClient {
    pub fn new(provider: impl IdentityProvider + 'static) -> Self {
        Self(Arc::new(provider))
    }

    #[must_use]
    pub fn provider(&self) -> &dyn IdentityProvider {
        self.0.as_ref()
    }
}

impl From<Arc<dyn IdentityProvider>> for AuthClient {
    fn from(provider: Arc<dyn IdentityProvider>) -> Self {
        Self(provider)
    }
}
