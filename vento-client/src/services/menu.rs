//! Menu (dish) facade

use crate::{HttpClient, ServiceResult};
use shared::{Dish, DishCreate, DishUpdate};

/// Facade for `/menu` operations
#[derive(Debug, Clone)]
pub struct MenuService {
    http: HttpClient,
}

impl MenuService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the caller's dishes.
    pub async fn list(&self) -> ServiceResult<Vec<Dish>> {
        self.http
            .get("menu/mis-platillos")
            .await
            .map_err(|e| e.into_service("Error fetching dishes"))
    }

    /// Create a dish.
    pub async fn create(&self, data: &DishCreate) -> ServiceResult<Dish> {
        tracing::debug!(nombre = %data.nombre, "creating dish");
        self.http
            .post("menu", data)
            .await
            .map_err(|e| e.into_service("Error creating dish"))
    }

    /// Patch a dish; only fields present in `data` change.
    pub async fn update(&self, id: &str, data: &DishUpdate) -> ServiceResult<Dish> {
        tracing::debug!(dish_id = %id, "updating dish");
        self.http
            .patch(&format!("menu/{id}"), data)
            .await
            .map_err(|e| e.into_service("Error updating dish"))
    }

    /// Delete a dish.
    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        tracing::debug!(dish_id = %id, "deleting dish");
        self.http
            .delete(&format!("menu/{id}"))
            .await
            .map_err(|e| e.into_service("Error deleting dish"))
    }
}
