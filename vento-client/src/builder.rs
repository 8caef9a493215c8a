//! New-order builder
//!
//! Composes an order before submission: unit-price snapshots, quantity
//! editing, per-line special instructions, and the client-computed total.
//! Validation of the customer label and line non-emptiness lives here, not
//! in the facade.

use shared::{Dish, OrderCreate, OrderLineInput};
use thiserror::Error;

/// One in-progress order line with its price snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderLine {
    pub platillo_id: String,
    pub nombre: String,
    /// Unit price captured when the dish was added
    pub precio: f64,
    pub cantidad: u32,
    pub notas_especiales: Option<String>,
}

/// Validation failure while building an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Customer name is required")]
    EmptyCustomer,
    #[error("At least one item is required")]
    EmptyOrder,
}

/// In-progress order
#[derive(Debug, Clone, Default)]
pub struct OrderBuilder {
    lines: Vec<BuilderLine>,
    notas: Option<String>,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a dish, snapshotting its current price. Adding a dish
    /// already present increments its quantity instead of duplicating it.
    pub fn add_dish(&mut self, dish: &Dish) {
        if let Some(line) = self.line_mut(&dish.id) {
            line.cantidad += 1;
            return;
        }
        self.lines.push(BuilderLine {
            platillo_id: dish.id.clone(),
            nombre: dish.nombre.clone(),
            precio: dish.precio,
            cantidad: 1,
            notas_especiales: None,
        });
    }

    /// Remove one unit; dropping below 1 removes the line entirely.
    pub fn decrement(&mut self, platillo_id: &str) {
        if let Some(idx) = self.lines.iter().position(|l| l.platillo_id == platillo_id) {
            if self.lines[idx].cantidad <= 1 {
                self.lines.remove(idx);
            } else {
                self.lines[idx].cantidad -= 1;
            }
        }
    }

    /// Set an exact quantity; 0 removes the line.
    pub fn set_quantity(&mut self, platillo_id: &str, cantidad: u32) {
        if cantidad == 0 {
            self.lines.retain(|l| l.platillo_id != platillo_id);
        } else if let Some(line) = self.line_mut(platillo_id) {
            line.cantidad = cantidad;
        }
    }

    /// Attach special instructions to a line already in the order.
    pub fn set_line_note(&mut self, platillo_id: &str, note: impl Into<String>) {
        if let Some(line) = self.line_mut(platillo_id) {
            let note = note.into();
            line.notas_especiales = (!note.trim().is_empty()).then_some(note);
        }
    }

    /// Free-text notes for the whole order.
    pub fn set_notes(&mut self, notas: impl Into<String>) {
        let notas = notas.into();
        self.notas = (!notas.trim().is_empty()).then_some(notas);
    }

    pub fn lines(&self) -> &[BuilderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Client-computed total: sum of price snapshot x quantity.
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.precio * l.cantidad as f64)
            .sum()
    }

    /// Validate and produce the create payload. The customer label travels
    /// inside `notas` alongside any free-text notes, which is where the
    /// backend expects it.
    pub fn build(&self, cliente: &str) -> Result<OrderCreate, BuildError> {
        let cliente = cliente.trim();
        if cliente.is_empty() {
            return Err(BuildError::EmptyCustomer);
        }
        if self.lines.is_empty() {
            return Err(BuildError::EmptyOrder);
        }

        let notas = match &self.notas {
            Some(extra) => format!("Cliente: {cliente}. {extra}"),
            None => format!("Cliente: {cliente}"),
        };

        Ok(OrderCreate {
            notas: Some(notas),
            detalles: self
                .lines
                .iter()
                .map(|l| OrderLineInput {
                    platillo_id: l.platillo_id.clone(),
                    cantidad: l.cantidad,
                    notas_especiales: l.notas_especiales.clone(),
                })
                .collect(),
        })
    }

    fn line_mut(&mut self, platillo_id: &str) -> Option<&mut BuilderLine> {
        self.lines.iter_mut().find(|l| l.platillo_id == platillo_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: &str, nombre: &str, precio: f64) -> Dish {
        Dish {
            id: id.to_string(),
            nombre: nombre.to_string(),
            descripcion: String::new(),
            precio,
            imagen_url: String::new(),
            disponible: true,
            categoria: "Hamburguesas".to_string(),
        }
    }

    #[test]
    fn total_is_price_times_quantity_over_snapshots() {
        let mut builder = OrderBuilder::new();
        let a = dish("a", "Hamburguesa", 5.0);
        let b = dish("b", "Agua", 3.0);

        builder.add_dish(&a);
        builder.add_dish(&a);
        builder.add_dish(&b);
        assert_eq!(builder.total(), 13.0);

        let payload = builder.build("Sofía").unwrap();
        assert_eq!(payload.detalles.len(), 2);
        assert_eq!(payload.detalles[0].platillo_id, "a");
        assert_eq!(payload.detalles[0].cantidad, 2);
        assert_eq!(payload.detalles[1].cantidad, 1);
    }

    #[test]
    fn decrementing_below_one_removes_the_line() {
        let mut builder = OrderBuilder::new();
        let a = dish("a", "Hamburguesa", 5.0);
        builder.add_dish(&a);
        builder.add_dish(&a);

        builder.decrement("a");
        assert_eq!(builder.lines()[0].cantidad, 1);

        builder.decrement("a");
        assert!(builder.is_empty());
        assert_eq!(builder.total(), 0.0);
    }

    #[test]
    fn snapshot_ignores_later_price_changes() {
        let mut builder = OrderBuilder::new();
        builder.add_dish(&dish("a", "Hamburguesa", 5.0));
        // Same dish, new price: quantity bumps but the snapshot stays
        builder.add_dish(&dish("a", "Hamburguesa", 9.0));
        assert_eq!(builder.total(), 10.0);
    }

    #[test]
    fn build_validates_customer_and_lines() {
        let mut builder = OrderBuilder::new();
        assert_eq!(builder.build("Ana").unwrap_err(), BuildError::EmptyOrder);

        builder.add_dish(&dish("a", "Hamburguesa", 5.0));
        assert_eq!(builder.build("   ").unwrap_err(), BuildError::EmptyCustomer);

        let payload = builder.build("Ana").unwrap();
        assert_eq!(payload.notas.as_deref(), Some("Cliente: Ana"));
    }

    #[test]
    fn notes_and_line_notes_travel_in_the_payload() {
        let mut builder = OrderBuilder::new();
        builder.add_dish(&dish("a", "Coca Cola", 3.0));
        builder.set_line_note("a", "Sin hielo");
        builder.set_notes("Para llevar");

        let payload = builder.build("Carlos").unwrap();
        assert_eq!(payload.notas.as_deref(), Some("Cliente: Carlos. Para llevar"));
        assert_eq!(
            payload.detalles[0].notas_especiales.as_deref(),
            Some("Sin hielo")
        );
    }
}
