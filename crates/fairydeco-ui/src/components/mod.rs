//! UI components for the `FairyDeco` client.

pub mod header;

pub use header::Header;
