//! Auth request/response types shared between the backend and the client.
//!
//! Field names follow the backend wire format (Spanish, camelCase).

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub correo: String,
    pub contrasena: String,
}

/// Register request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "nombreCompleto")]
    pub nombre_completo: String,
    pub correo: String,
    pub contrasena: String,
}

/// Authenticated user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    #[serde(rename = "nombreCompleto", default)]
    pub nombre_completo: String,
    #[serde(default)]
    pub correo: String,
    /// Role label (e.g. "Administrador", "Cajero")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rol: Option<String>,
}

/// Login/register response data
///
/// The backend answers either `{token, user}` or `{user}` depending on the
/// deployment; the session rides a cookie either way, so the token is
/// optional and informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub user: User,
}
