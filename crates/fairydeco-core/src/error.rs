//! Error types for the `FairyDeco` core crate.

use thiserror::Error;

/// Errors that can occur when reading from the persistent key-value store.
///
/// These never propagate past [`crate::AuthState::load`]; they exist so the
/// storage adapters have an honest signature and so absorbed failures can be
/// logged with their cause.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No storage backend is available in the current context (e.g. the
    /// browser denied access to `localStorage`, or there is no window).
    #[error("persistent storage is unavailable")]
    Unavailable,

    /// The backend exists but refused the read.
    #[error("failed to read key {key:?} from storage: {message}")]
    Access {
        /// The key whose read failed.
        key: String,
        /// Backend-provided failure description.
        message: String,
    },
}
