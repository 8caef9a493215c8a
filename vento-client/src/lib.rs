//! Vento Client - HTTP client for the Vento POS backend
//!
//! Resource facades (auth, menu, orders) over a cookie-credentialed JSON API,
//! a persistent session store, the order lifecycle view-model, and the
//! client-side sales aggregator.

pub mod builder;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod session;
pub mod services;
pub mod stats;

pub use builder::{BuildError, OrderBuilder};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorKind, ServiceError, ServiceResult};
pub use http::HttpClient;
pub use lifecycle::{BoardError, OrderBoard, OrderFilter};
pub use services::{AuthService, MenuService, OrderService};
pub use session::SessionStore;
pub use stats::{aggregate, aggregate_at, DailySales, SalesSummary};

// Re-export shared types for convenience
pub use shared::{
    AuthResponse, Dish, DishCreate, DishUpdate, LoginRequest, Order, OrderCreate, OrderLine,
    OrderLineInput, OrderStatus, OrderUpdate, RegisterRequest, User,
};
