//! Browser-side persistence of the auth session.
//!
//! The session (bearer tokens + profile) lives in localStorage under a
//! single key as JSON. `BrowserSession` is the `SessionProvider`
//! implementation injected into the API client; it reads storage per
//! request so a login or logout in another component is picked up
//! immediately.

use payloads::{Session, SessionProvider};
use web_sys::Storage;

const SESSION_KEY: &str = "sewabazaar.session";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Load the persisted session, if any. A corrupt entry is treated as
/// absent and removed so it can't wedge the login flow.
pub fn load() -> Option<Session> {
    let storage = local_storage()?;
    let raw = storage.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("Discarding unreadable stored session: {e}");
            let _ = storage.remove_item(SESSION_KEY);
            None
        }
    }
}

/// Persist the session after login or token refresh.
pub fn store(session: &Session) {
    let Some(storage) = local_storage() else {
        tracing::warn!("localStorage unavailable; session not persisted");
        return;
    };
    match serde_json::to_string(session) {
        Ok(raw) => {
            if storage.set_item(SESSION_KEY, &raw).is_err() {
                tracing::warn!("Failed to persist session");
            }
        }
        Err(e) => tracing::warn!("Failed to serialize session: {e}"),
    }
}

/// Drop the persisted session at logout or token expiry.
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

/// Token source backed by localStorage. Stateless; reads per request.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSession;

impl SessionProvider for BrowserSession {
    fn access_token(&self) -> Option<String> {
        load().map(|session| session.access)
    }
}
