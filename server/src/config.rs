//! Server configuration loaded from environment variables.
//!
//! `PORT` and the identity settings are read once at startup.
//! `FIREBASE_API_KEY` and `FEDERATED_SIGN_IN_URL` are required; the popup
//! handler page lives outside this server, so there is no useful default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use genesis_client::net::config::{DEFAULT_IDENTITY_ENDPOINT, IdentityConfig};

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub identity: IdentityConfig,
}

impl ServerConfig {
    /// Load from `PORT`, `FIREBASE_API_KEY`, `IDENTITY_ENDPOINT`, and
    /// `FEDERATED_SIGN_IN_URL`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the API key or federated sign-in URL is
    /// missing, or `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let api_key = non_empty("FIREBASE_API_KEY").ok_or(ConfigError::Missing("FIREBASE_API_KEY"))?;
        let identity_endpoint =
            non_empty("IDENTITY_ENDPOINT").unwrap_or_else(|| DEFAULT_IDENTITY_ENDPOINT.to_owned());
        let federated_url =
            non_empty("FEDERATED_SIGN_IN_URL").ok_or(ConfigError::Missing("FEDERATED_SIGN_IN_URL"))?;

        Ok(Self { port, identity: IdentityConfig { api_key, identity_endpoint, federated_url } })
    }
}
