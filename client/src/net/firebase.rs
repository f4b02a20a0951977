//! Firebase Identity Toolkit adapter.
//!
//! Client-side (hydrate): credential sign-in via the REST
//! `accounts:signInWithPassword` endpoint using `gloo-net`, federated
//! sign-in via the popup bridge in `net::popup`.
//! Server-side (SSR): every call fails, since sign-in only happens in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! The provider's `error.message` is passed through untouched. Transport
//! failures carry the transport error text. No classification happens here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "firebase_test.rs"]
mod firebase_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::{Deserialize, Serialize};

use super::config::IdentityConfig;
use super::identity::{AuthError, AuthResult, Credentials, FederatedProvider, IdentityProvider};
#[cfg(any(test, feature = "hydrate"))]
use super::identity::Session;

#[cfg(not(feature = "hydrate"))]
pub const BROWSER_ONLY_MESSAGE: &str = "sign-in is only available in the browser";

/// Provider tag recorded on sessions from credential sign-in.
#[cfg(any(test, feature = "hydrate"))]
const PASSWORD_PROVIDER: &str = "password";

/// Identity provider backed by a Firebase project.
#[derive(Clone, Debug)]
pub struct FirebaseAuth {
    config: IdentityConfig,
}

impl FirebaseAuth {
    #[must_use]
    pub fn new(config: IdentityConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[cfg(any(test, feature = "hydrate"))]
impl<'a> SignInRequest<'a> {
    fn new(credentials: &'a Credentials) -> Self {
        Self { email: &credentials.email, password: &credentials.password, return_secure_token: true }
    }
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    id_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_endpoint(config: &IdentityConfig) -> String {
    format!(
        "{}/v1/accounts:signInWithPassword?key={}",
        config.identity_endpoint.trim_end_matches('/'),
        config.api_key
    )
}

/// Map a 2xx `signInWithPassword` body to a session.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_body(body: &str) -> AuthResult {
    let resp: SignInResponse =
        serde_json::from_str(body).map_err(|e| AuthError::new(format!("unexpected sign-in response: {e}")))?;
    Ok(Session {
        user_id: resp.local_id,
        email: resp.email,
        id_token: resp.id_token,
        refresh_token: resp.refresh_token,
        provider: PASSWORD_PROVIDER.to_owned(),
    })
}

/// Map a non-2xx body to the provider's message, or a status line when the
/// body is not a provider error envelope.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(status: u16, body: &str) -> AuthError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => AuthError::new(envelope.error.message),
        Err(_) => AuthError::new(format!("sign-in failed: {status}")),
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for FirebaseAuth {
    async fn sign_in_with_email_password(&self, credentials: Credentials) -> AuthResult {
        #[cfg(feature = "hydrate")]
        {
            let url = sign_in_endpoint(&self.config);
            let resp = gloo_net::http::Request::post(&url)
                .json(&SignInRequest::new(&credentials))
                .map_err(|e| AuthError::new(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::new(e.to_string()))?;
            let ok = resp.ok();
            let status = resp.status();
            let body = resp.text().await.map_err(|e| AuthError::new(e.to_string()))?;
            if ok {
                session_from_body(&body)
            } else {
                log::info!("credential sign-in rejected with status {status}");
                Err(error_from_body(status, &body))
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::new(BROWSER_ONLY_MESSAGE))
        }
    }

    async fn sign_in_with_popup(&self, provider: FederatedProvider) -> AuthResult {
        #[cfg(feature = "hydrate")]
        {
            let url = super::popup::popup_url(&self.config.federated_url, provider);
            super::popup::sign_in_with_popup(&url).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = provider;
            Err(AuthError::new(BROWSER_ONLY_MESSAGE))
        }
    }
}
