//! Browser `localStorage` adapter for the core storage trait.
//!
//! The login flow elsewhere in the application writes the user identifier to
//! `localStorage`; this adapter gives components read access through the
//! [`UserStore`] seam so they stay testable without a browser.

use fairydeco_core::{StoreError, UserStore};
use wasm_bindgen::JsValue;

/// Read-only view of the browser's `localStorage`.
///
/// Holds no JS handle of its own - the `Storage` object is fetched on every
/// read - so the struct stays `Send + Sync` as the trait requires. The reads
/// are one-shot and rare enough that the extra lookup does not matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    /// Create the adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        window
            .local_storage()
            .map_err(|_| StoreError::Unavailable)?
            .ok_or(StoreError::Unavailable)
    }

    fn describe(err: &JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }
}

impl UserStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = Self::storage()?;
        storage.get_item(key).map_err(|err| StoreError::Access {
            key: key.to_string(),
            message: Self::describe(&err),
        })
    }
}
