//! `FairyDeco` Core Library
//!
//! This crate provides the platform-neutral logic for the `FairyDeco` client:
//! - Authentication-presence state derived from a stored user identifier
//! - A read-only key-value storage abstraction (backed by browser
//!   `localStorage` in the UI crate, by an in-memory map in tests)
//! - Route constants shared between components
//!
//! # Error Handling
//!
//! Storage failures are typed (see the [`error`] module) but are absorbed at
//! the [`auth::AuthState::load`] boundary: a failed read is indistinguishable
//! from "not signed in". Nothing in this crate surfaces an error to a caller
//! above that boundary.

pub mod auth;
pub mod error;
pub mod routes;
pub mod store;

pub use auth::AuthState;
pub use error::StoreError;
pub use store::{InMemoryStore, USER_ID_KEY, UserStore};
