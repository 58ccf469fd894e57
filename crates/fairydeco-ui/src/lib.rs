//! `FairyDeco` UI - Leptos-based user interface.
//!
//! This crate provides the frontend components for the `FairyDeco` client.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod browser_store;
pub mod components;

pub use app::App;
pub use browser_store::BrowserStore;
