//! Client error types
//!
//! Two layers: [`ClientError`] is the transport-level error produced by
//! [`crate::HttpClient`]; [`ServiceError`] is the uniform shape every facade
//! operation resolves to, carrying an always non-empty user-facing message
//! (server-provided when available, per-operation fallback otherwise).

use thiserror::Error;

/// Transport-level error
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication required (401 anywhere)
    #[error("Authentication required")]
    Unauthorized,

    /// Non-2xx API response with an optional server message
    #[error("API error ({status})")]
    Api { status: u16, message: Option<String> },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for transport operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Broad error category, for routing (e.g. `Unauthorized` sends the caller
/// back to the login view).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection failure, timeout, or undecodable response
    Network,
    /// The backend answered with a non-2xx status
    Api,
    /// The session is invalid (401)
    Unauthorized,
}

/// Uniform facade error: a category plus a non-empty displayable message.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ServiceError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ServiceError {
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Unauthorized
    }
}

/// Result type for facade operations
pub type ServiceResult<T> = Result<T, ServiceError>;

impl ClientError {
    /// Normalize into the uniform facade shape. The server message wins when
    /// present and non-blank; `fallback` covers everything else.
    pub fn into_service(self, fallback: &str) -> ServiceError {
        match self {
            ClientError::Unauthorized => ServiceError {
                kind: ErrorKind::Unauthorized,
                message: "Authentication required".to_string(),
            },
            ClientError::Api { message, .. } => {
                let message = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| fallback.to_string());
                ServiceError {
                    kind: ErrorKind::Api,
                    message,
                }
            }
            ClientError::Http(_) | ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                ServiceError {
                    kind: ErrorKind::Network,
                    message: fallback.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ClientError::Api {
            status: 400,
            message: Some("Nombre requerido".to_string()),
        }
        .into_service("Error creating dish");
        assert_eq!(err.kind, ErrorKind::Api);
        assert_eq!(err.message, "Nombre requerido");
    }

    #[test]
    fn blank_server_message_falls_back() {
        let err = ClientError::Api {
            status: 500,
            message: Some("   ".to_string()),
        }
        .into_service("Error fetching orders");
        assert_eq!(err.message, "Error fetching orders");
    }

    #[test]
    fn unauthorized_is_routed_distinctly() {
        let err = ClientError::Unauthorized.into_service("Error fetching profile");
        assert!(err.is_unauthorized());
        assert!(!err.message.is_empty());
    }
}
