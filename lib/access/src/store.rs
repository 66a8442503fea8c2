//! Key/value storage backing the session.
//!
//! The session itself is a thin typed layer over a string key/value store.
//! In the browser the store is `sessionStorage` (tab-scoped, cleared when
//! the tab ends); in tests it is an in-memory map. The trait keeps the
//! session logic free of any browser API so it can be exercised natively.

use std::collections::HashMap;
use std::sync::Mutex;

/// Abstraction over tab-scoped key/value storage.
///
/// Implementations must be plain storage: no side effects beyond the
/// key/value pairs and no network calls.
pub trait SessionStore: Send + Sync {
    /// Returns the value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Persists `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Removes `key` and its value, if present.
    fn remove(&self, key: &str);
}

/// In-memory session store for tests and native targets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let store = MemoryStore::new();
        store.set("token", "abc");
        assert_eq!(store.get("token"), Some("abc".to_string()));
    }

    #[test]
    fn get_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn set_replaces_previous_value() {
        let store = MemoryStore::new();
        store.set("tenant", "school-123");
        store.set("tenant", "org-xyz");
        assert_eq!(store.get("tenant"), Some("org-xyz".to_string()));
    }

    #[test]
    fn remove_clears_value() {
        let store = MemoryStore::new();
        store.set("userId", "EMP-1");
        store.remove("userId");
        assert_eq!(store.get("userId"), None);
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let store = MemoryStore::new();
        store.remove("missing");
        assert_eq!(store.get("missing"), None);
    }
}
