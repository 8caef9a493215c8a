//! Order (pedido) model and status state machine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status.
///
/// Statuses advance monotonically through
/// `pendiente → confirmado → preparando → listo → entregado`, with
/// `cancelado` reachable only while the order has not entered the kitchen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pendiente,
    Confirmado,
    Preparando,
    Listo,
    Entregado,
    Cancelado,
}

impl OrderStatus {
    /// Legal next statuses from this one. This table is the single source of
    /// truth for which transition actions a front end may offer.
    pub fn next_transitions(self) -> &'static [OrderStatus] {
        use OrderStatus::*;
        match self {
            Pendiente => &[Confirmado, Cancelado],
            Confirmado => &[Preparando, Cancelado],
            Preparando => &[Listo],
            Listo => &[Entregado],
            Entregado | Cancelado => &[],
        }
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.next_transitions().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.next_transitions().is_empty()
    }

    /// Completed orders count toward revenue.
    pub fn is_completed(self) -> bool {
        matches!(self, OrderStatus::Listo | OrderStatus::Entregado)
    }

    /// Active orders are the ones still being worked.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            OrderStatus::Pendiente | OrderStatus::Confirmado | OrderStatus::Preparando
        )
    }

    /// Wire string, also used as the display label.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pendiente => "pendiente",
            OrderStatus::Confirmado => "confirmado",
            OrderStatus::Preparando => "preparando",
            OrderStatus::Listo => "listo",
            OrderStatus::Entregado => "entregado",
            OrderStatus::Cancelado => "cancelado",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dish-quantity entry within an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "platilloId")]
    pub platillo_id: String,
    pub cantidad: u32,
    /// Unit price snapshot taken at order time
    #[serde(default, deserialize_with = "crate::util::de_lenient_amount")]
    pub precio: f64,
    #[serde(
        rename = "notasEspeciales",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub notas_especiales: Option<String>,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Human-readable order number, e.g. "#12345"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cliente: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
    pub estado: OrderStatus,
    /// Server-computed total; malformed values degrade to 0
    #[serde(default, deserialize_with = "crate::util::de_lenient_amount")]
    pub total: f64,
    /// Raw creation timestamp; coerced by consumers via `util::coerce_timestamp`
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub detalles: Vec<OrderLine>,
}

/// One line of a create-order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineInput {
    #[serde(rename = "platilloId")]
    pub platillo_id: String,
    pub cantidad: u32,
    #[serde(
        rename = "notasEspeciales",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub notas_especiales: Option<String>,
}

/// Create order payload. Line non-emptiness is the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
    pub detalles: Vec<OrderLineInput>,
}

/// Update order payload; the status travels as `estado`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<OrderStatus>,
}
