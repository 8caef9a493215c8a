//! Order (pedido) facade

use crate::{HttpClient, ServiceResult};
use shared::{Order, OrderCreate, OrderUpdate};

/// Facade for `/pedidos` operations
#[derive(Debug, Clone)]
pub struct OrderService {
    http: HttpClient,
}

impl OrderService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the caller's orders in one page.
    pub async fn list(&self) -> ServiceResult<Vec<Order>> {
        self.http
            .get("pedidos/mis-pedidos")
            .await
            .map_err(|e| e.into_service("Error fetching orders"))
    }

    /// Create an order. Line non-emptiness is validated by the caller
    /// (see [`crate::OrderBuilder`]), not here.
    pub async fn create(&self, data: &OrderCreate) -> ServiceResult<Order> {
        tracing::debug!(lines = data.detalles.len(), "creating order");
        self.http
            .post("pedidos", data)
            .await
            .map_err(|e| e.into_service("Error creating order"))
    }

    /// Patch an order; a status change travels as `estado`.
    pub async fn update(&self, id: &str, data: &OrderUpdate) -> ServiceResult<Order> {
        tracing::debug!(order_id = %id, estado = ?data.estado, "updating order");
        self.http
            .patch(&format!("pedidos/{id}"), data)
            .await
            .map_err(|e| e.into_service("Error updating order"))
    }
}
