//! Auth facade

use crate::{HttpClient, ServiceResult};
use shared::{AuthResponse, LoginRequest, RegisterRequest, User};

/// Facade for `/auth` operations
#[derive(Debug, Clone)]
pub struct AuthService {
    http: HttpClient,
}

impl AuthService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Login with email and password; the session cookie rides the response.
    pub async fn login(&self, request: &LoginRequest) -> ServiceResult<AuthResponse> {
        tracing::debug!(correo = %request.correo, "logging in");
        self.http
            .post("auth/login", request)
            .await
            .map_err(|e| e.into_service("Error logging in"))
    }

    /// Register a new account; the backend logs the new user in.
    pub async fn register(&self, request: &RegisterRequest) -> ServiceResult<AuthResponse> {
        tracing::debug!(correo = %request.correo, "registering");
        self.http
            .post("auth/register", request)
            .await
            .map_err(|e| e.into_service("Error registering user"))
    }

    /// Invalidate the server-side session.
    pub async fn logout(&self) -> ServiceResult<()> {
        self.http
            .post_unit("auth/logout/secure")
            .await
            .map_err(|e| e.into_service("Error logging out"))
    }

    /// Fetch the profile of the currently authenticated user.
    pub async fn me(&self) -> ServiceResult<User> {
        self.http
            .get("auth/me")
            .await
            .map_err(|e| e.into_service("Error fetching profile"))
    }
}
