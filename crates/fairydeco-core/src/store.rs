//! Read-only key-value storage abstraction.
//!
//! The broader application owns the store and writes to it during the login
//! flow; components in this client only ever read from it. Abstracting the
//! store behind a trait keeps the components deterministic under test -
//! the UI crate plugs in browser `localStorage`, tests plug in a mock or an
//! [`InMemoryStore`].

use std::collections::HashMap;

use crate::error::StoreError;

/// Storage key under which the login flow persists the user identifier.
pub const USER_ID_KEY: &str = "userId";

/// Trait for read access to the persistent key-value store.
/// This trait allows for mocking in tests.
#[cfg_attr(test, mockall::automock)]
pub trait UserStore: Send + Sync {
    /// Look up a value by key.
    ///
    /// Returns `Ok(None)` when the key has never been written. An `Err`
    /// means the backend itself is unusable, not that the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
}

/// `HashMap`-backed store for tests and native tooling.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous one for the same key.
    ///
    /// Writing is a test/tooling convenience; production components never
    /// write through the [`UserStore`] trait.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl UserStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_store_returns_none_for_missing_key() {
        let store = InMemoryStore::new();
        assert_eq!(store.get(USER_ID_KEY), Ok(None));
    }

    #[test]
    fn test_in_memory_store_returns_inserted_value() {
        let mut store = InMemoryStore::new();
        store.insert(USER_ID_KEY, "abc123");
        assert_eq!(store.get(USER_ID_KEY), Ok(Some("abc123".to_string())));
    }

    #[test]
    fn test_insert_replaces_previous_value() {
        let mut store = InMemoryStore::new();
        store.insert(USER_ID_KEY, "first");
        store.insert(USER_ID_KEY, "second");
        assert_eq!(store.get(USER_ID_KEY), Ok(Some("second".to_string())));
    }
}
