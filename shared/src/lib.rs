//! Shared types for the Vento POS client
//!
//! Data models and DTOs exchanged with the backend, the order status
//! state machine, and the lenient numeric/date coercion utilities.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use client::{AuthResponse, LoginRequest, RegisterRequest, User};
pub use models::{
    Dish, DishCreate, DishUpdate, Order, OrderCreate, OrderLine, OrderLineInput, OrderStatus,
    OrderUpdate,
};
