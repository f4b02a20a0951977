//! Federated sign-in popup bridge.
//!
//! Opens the configured sign-in page in a popup window and waits for it to
//! report back with `window.opener.postMessage(json, origin)`, where `json`
//! is either `{"session": {...}}` or `{"error": "message"}`. Messages from
//! other origins or with any other shape are ignored. A popup closed before
//! reporting settles the call as a failure.
//!
//! All window handling is gated behind `#[cfg(feature = "hydrate")]`.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
use super::identity::{AuthError, AuthResult, FederatedProvider, Session};

pub const POPUP_BLOCKED: &str = "auth/popup-blocked";
pub const POPUP_CLOSED_BY_USER: &str = "auth/popup-closed-by-user";

#[cfg(feature = "hydrate")]
const POPUP_NAME: &str = "genesis-federated-sign-in";
#[cfg(feature = "hydrate")]
const POPUP_FEATURES: &str = "popup=yes,width=500,height=640";
#[cfg(feature = "hydrate")]
const CLOSE_POLL_MS: u32 = 500;

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PopupMessage {
    SignedIn { session: Session },
    Failed { error: String },
}

/// Popup page URL for `provider`, keeping any query the base already has.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn popup_url(base: &str, provider: FederatedProvider) -> String {
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{base}{sep}providerId={}", provider.provider_id())
}

/// Decode a popup message. `None` means the message is not ours.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_popup_message(data: &str) -> Option<AuthResult> {
    match serde_json::from_str::<PopupMessage>(data).ok()? {
        PopupMessage::SignedIn { session } => Some(Ok(session)),
        PopupMessage::Failed { error } => Some(Err(AuthError::new(error))),
    }
}

/// Run the popup flow against `url` and wait for it to settle.
#[cfg(feature = "hydrate")]
pub(crate) async fn sign_in_with_popup(url: &str) -> AuthResult {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::future::{self, Either};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let window = web_sys::window().ok_or_else(|| AuthError::new(POPUP_BLOCKED))?;
    let popup = window
        .open_with_url_and_target_and_features(url, POPUP_NAME, POPUP_FEATURES)
        .ok()
        .flatten()
        .ok_or_else(|| {
            log::warn!("federated sign-in popup was blocked");
            AuthError::new(POPUP_BLOCKED)
        })?;
    let origin = window.location().origin().unwrap_or_default();

    let (tx, rx) = oneshot::channel::<AuthResult>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let on_message = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut(web_sys::MessageEvent)>::new(move |ev: web_sys::MessageEvent| {
            if ev.origin() != origin {
                return;
            }
            let Some(result) = ev.data().as_string().as_deref().and_then(parse_popup_message) else {
                return;
            };
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(result);
            }
        })
    };
    if window
        .add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())
        .is_err()
    {
        let _ = popup.close();
        return Err(AuthError::new(POPUP_BLOCKED));
    }

    let closed = async {
        loop {
            gloo_timers::future::TimeoutFuture::new(CLOSE_POLL_MS).await;
            if popup.closed().unwrap_or(true) {
                break;
            }
        }
    };
    futures::pin_mut!(closed);

    let result = match future::select(rx, closed).await {
        Either::Left((Ok(result), _)) => result,
        Either::Left((Err(_), _)) | Either::Right(((), _)) => {
            log::info!("federated sign-in popup closed before completing");
            Err(AuthError::new(POPUP_CLOSED_BY_USER))
        }
    };

    let _ = window.remove_event_listener_with_callback("message", on_message.as_ref().unchecked_ref());
    let _ = popup.close();
    result
}
