//! Data models
//!
//! Shared between the backend API and the client. Wire field names are the
//! backend's (Spanish, camelCase); struct fields are snake_case with serde
//! renames where the two differ.

pub mod dish;
pub mod order;

// Re-exports
pub use dish::*;
pub use order::*;
