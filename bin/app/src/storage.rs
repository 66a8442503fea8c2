//! Browser-backed session storage.
//!
//! Uses `sessionStorage`, which is scoped to the browser tab and cleared
//! when the tab ends. `localStorage` would survive the browser process
//! and leak one user's session into later sessions, so it is deliberately
//! not used here.

use slateboard_access::SessionStore;
use web_sys::Storage;

/// Tab-scoped session store over `window.sessionStorage`.
///
/// All operations degrade to no-ops when the storage area is unavailable
/// (e.g. storage access disabled); the session then simply reads as
/// empty, which fails closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    /// Creates a handle to the tab's session storage.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
