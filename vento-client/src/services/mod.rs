//! Resource facades
//!
//! One facade per backend resource family. Every operation resolves to a
//! [`crate::ServiceResult`]: data on success, a non-empty user-facing message
//! on failure. No facade retries, mutates optimistically, or lets a raw
//! transport error through.

pub mod auth;
pub mod menu;
pub mod orders;

pub use auth::AuthService;
pub use menu::MenuService;
pub use orders::OrderService;
