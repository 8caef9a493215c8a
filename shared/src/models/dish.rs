//! Dish (platillo) model

use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    /// Non-negative price; malformed values from the backend degrade to 0
    #[serde(default, deserialize_with = "crate::util::de_lenient_amount")]
    pub precio: f64,
    #[serde(rename = "imagenUrl", default)]
    pub imagen_url: String,
    #[serde(default = "default_true")]
    pub disponible: bool,
    #[serde(default)]
    pub categoria: String,
}

fn default_true() -> bool {
    true
}

/// Create dish payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCreate {
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    #[serde(rename = "imagenUrl", skip_serializing_if = "Option::is_none")]
    pub imagen_url: Option<String>,
    pub disponible: bool,
    pub categoria: String,
}

/// Update dish payload; absent fields are left untouched by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio: Option<f64>,
    #[serde(rename = "imagenUrl", skip_serializing_if = "Option::is_none")]
    pub imagen_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disponible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dish_tolerates_sparse_payloads() {
        let dish: Dish = serde_json::from_value(serde_json::json!({
            "id": "d1",
            "nombre": "Hamburguesa Clásica",
            "precio": "12.00"
        }))
        .unwrap();
        assert_eq!(dish.precio, 12.0);
        assert!(dish.disponible);
        assert_eq!(dish.descripcion, "");
    }

    #[test]
    fn update_serializes_only_present_fields() {
        let update = DishUpdate {
            disponible: Some(false),
            ..Default::default()
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, serde_json::json!({ "disponible": false }));
    }
}
