//! Public identity-service configuration shared by server and browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server loads this from its environment and embeds it in the HTML
//! shell as a `<meta>` tag. During hydration the browser reads it back, so
//! the WASM bundle never needs build-time secrets. Only public values
//! (web API key, endpoints) belong here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// `name` attribute of the meta tag carrying the serialized config.
pub const META_NAME: &str = "identity-config";
pub const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";
/// Fallback popup path when the server sent no config. The server itself
/// requires `FEDERATED_SIGN_IN_URL`, so deployed pages always carry one.
pub const DEFAULT_FEDERATED_URL: &str = "/auth/popup";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Public web API key of the identity project.
    pub api_key: String,
    /// Base URL of the identity REST service.
    #[serde(default = "default_identity_endpoint")]
    pub identity_endpoint: String,
    /// Page opened in the federated sign-in popup.
    #[serde(default = "default_federated_url")]
    pub federated_url: String,
}

fn default_identity_endpoint() -> String {
    DEFAULT_IDENTITY_ENDPOINT.to_owned()
}

fn default_federated_url() -> String {
    DEFAULT_FEDERATED_URL.to_owned()
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            identity_endpoint: default_identity_endpoint(),
            federated_url: default_federated_url(),
        }
    }
}

impl IdentityConfig {
    /// Serialize for the `content` attribute of the config meta tag.
    #[must_use]
    pub fn to_meta_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse the `content` attribute of the config meta tag.
    #[must_use]
    pub fn from_meta_content(content: &str) -> Option<Self> {
        serde_json::from_str(content).ok()
    }

    /// Resolve the config for the current render.
    ///
    /// Browser: read from the meta tag written by the server.
    /// Server: read from the Leptos context provided by the host.
    /// Falls back to defaults (empty API key) when neither is available.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{META_NAME}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            match content.as_deref().and_then(Self::from_meta_content) {
                Some(config) => config,
                None => {
                    log::warn!("identity config meta tag missing or malformed; using defaults");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            leptos::prelude::use_context::<Self>().unwrap_or_default()
        }
    }
}
