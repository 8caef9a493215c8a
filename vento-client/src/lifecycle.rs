//! Order lifecycle view-model
//!
//! Derives the filtered/sorted order list for display and drives status
//! transitions. Legality comes from [`OrderStatus::next_transitions`]; the
//! board only adds the per-order in-flight guard (at most one status request
//! per order id at a time) and the reload-after-mutation discipline.

use crate::{OrderService, ServiceError, ServiceResult};
use shared::util::coerce_timestamp;
use shared::{Order, OrderStatus, OrderUpdate};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::{Mutex, RwLock};
use thiserror::Error;

/// Which orders a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderFilter {
    /// Every status, including cancelled
    #[default]
    All,
    /// pendiente, confirmado, preparando
    Active,
    /// listo, entregado
    Completed,
}

impl OrderFilter {
    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            OrderFilter::All => true,
            OrderFilter::Active => status.is_active(),
            OrderFilter::Completed => status.is_completed(),
        }
    }
}

/// Failure of a board operation
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Order {0} not found")]
    UnknownOrder(String),

    #[error("Transition {from} -> {to} is not allowed")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },

    /// A status request for this order is already in flight; no second
    /// request was issued.
    #[error("A status update for order {0} is already pending")]
    UpdateInFlight(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Shared-state order dashboard view-model
pub struct OrderBoard {
    orders: OrderService,
    list: RwLock<Vec<Order>>,
    filter: RwLock<OrderFilter>,
    search: RwLock<String>,
    in_flight: Mutex<HashSet<String>>,
}

impl OrderBoard {
    pub fn new(orders: OrderService) -> Self {
        Self {
            orders,
            list: RwLock::new(Vec::new()),
            filter: RwLock::new(OrderFilter::default()),
            search: RwLock::new(String::new()),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Reload the full order list from the backend.
    pub async fn refresh(&self) -> ServiceResult<usize> {
        let orders = self.orders.list().await?;
        let count = orders.len();
        *self.list.write().expect("order list lock poisoned") = orders;
        tracing::debug!(count, "order list refreshed");
        Ok(count)
    }

    pub fn set_filter(&self, filter: OrderFilter) {
        *self.filter.write().expect("filter lock poisoned") = filter;
    }

    pub fn filter(&self) -> OrderFilter {
        *self.filter.read().expect("filter lock poisoned")
    }

    pub fn set_search(&self, term: impl Into<String>) {
        *self.search.write().expect("search lock poisoned") = term.into();
    }

    /// The orders the current tab and search term leave visible, newest
    /// first. Unparseable creation timestamps sort as "now".
    pub fn visible_orders(&self) -> Vec<Order> {
        let filter = self.filter();
        let needle = self
            .search
            .read()
            .expect("search lock poisoned")
            .to_lowercase();
        let now = chrono::Utc::now();

        let mut visible: Vec<Order> = self
            .list
            .read()
            .expect("order list lock poisoned")
            .iter()
            .filter(|o| filter.matches(o.estado) && matches_search(o, &needle))
            .cloned()
            .collect();
        visible.sort_by_key(|o| Reverse(coerce_timestamp(o.created_at.as_deref(), now)));
        visible
    }

    /// Whether a status request for this order is in flight. Front ends use
    /// this to disable the transition buttons for that order.
    pub fn pending(&self, order_id: &str) -> bool {
        self.in_flight
            .lock()
            .expect("in-flight lock poisoned")
            .contains(order_id)
    }

    /// The transitions a view may offer for this order right now: none while
    /// a request for it is pending, the status table's answer otherwise.
    pub fn offered_transitions(&self, order: &Order) -> &'static [OrderStatus] {
        if self.pending(&order.id) {
            &[]
        } else {
            order.estado.next_transitions()
        }
    }

    /// Request a status transition.
    ///
    /// Rejects unknown orders, illegal transitions, and duplicate requests
    /// for an order whose update is still in flight (the duplicate issues no
    /// HTTP request). On success the list is reloaded; on failure the order
    /// keeps its previous status.
    pub async fn request_transition(
        &self,
        order_id: &str,
        next: OrderStatus,
    ) -> Result<(), BoardError> {
        let current = {
            let list = self.list.read().expect("order list lock poisoned");
            list.iter()
                .find(|o| o.id == order_id)
                .map(|o| o.estado)
                .ok_or_else(|| BoardError::UnknownOrder(order_id.to_string()))?
        };
        if !current.can_transition_to(next) {
            return Err(BoardError::IllegalTransition {
                from: current,
                to: next,
            });
        }

        {
            let mut in_flight = self.in_flight.lock().expect("in-flight lock poisoned");
            if !in_flight.insert(order_id.to_string()) {
                return Err(BoardError::UpdateInFlight(order_id.to_string()));
            }
        }

        let update = OrderUpdate {
            estado: Some(next),
            notas: None,
        };
        let result = self.orders.update(order_id, &update).await;

        self.in_flight
            .lock()
            .expect("in-flight lock poisoned")
            .remove(order_id);

        match result {
            Ok(_) => {
                tracing::info!(order_id = %order_id, estado = %next, "order transitioned");
                self.refresh().await?;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(order_id = %order_id, error = %e, "transition failed");
                Err(e.into())
            }
        }
    }
}

fn matches_search(order: &Order, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |value: &str| value.to_lowercase().contains(needle);
    order.numero.as_deref().is_some_and(hit)
        || order.cliente.as_deref().is_some_and(hit)
        || hit(&order.id)
}
