//! Session persistence across app restarts.
//!
//! The session is mirrored to `localStorage` as JSON: written through on
//! every auth change, read once at startup, cleared on sign-out. Browser-only
//! behavior; SSR paths no-op. A cache entry that no longer parses is treated
//! as absent rather than an error.

#[cfg(feature = "hydrate")]
use crate::net::types::Session;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "gatehouse_session";

/// Load the persisted session, if any.
#[cfg(feature = "hydrate")]
pub fn load() -> Option<Session> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok().flatten()?;
    let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Persist `session`, replacing any previous entry.
#[cfg(feature = "hydrate")]
pub fn store(session: &Session) {
    let Ok(raw) = serde_json::to_string(session) else {
        return;
    };
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
    }
}

/// Remove the persisted session.
#[cfg(feature = "hydrate")]
pub fn clear() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
