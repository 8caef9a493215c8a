//! Session store
//!
//! Holds at most one authenticated user. The current user is persisted as a
//! single JSON record so a restart does not force re-entering credentials;
//! restoration runs exactly once per store instance regardless of how many
//! callers ask. Policy: trust the persisted copy first, fall back to the
//! backend profile endpoint when no copy exists.

use crate::{AuthService, ClientConfig, ServiceResult};
use shared::{LoginRequest, RegisterRequest, User};
use std::path::PathBuf;
use std::sync::RwLock;
use tokio::sync::OnceCell;

/// Client-side session state
pub struct SessionStore {
    auth: AuthService,
    session_file: Option<PathBuf>,
    user: RwLock<Option<User>>,
    restored: OnceCell<()>,
}

impl SessionStore {
    pub fn new(config: &ClientConfig, auth: AuthService) -> Self {
        Self {
            auth,
            session_file: config.session_file.clone(),
            user: RwLock::new(None),
            restored: OnceCell::new(),
        }
    }

    /// Determine whether a valid session exists, without credentials.
    ///
    /// The underlying probe (persisted record, else `GET /auth/me`) runs at
    /// most once per store instance; later calls return the cached outcome.
    pub async fn restore(&self) -> Option<User> {
        self.restored
            .get_or_init(|| async {
                if let Some(user) = self.load_persisted() {
                    tracing::info!(correo = %user.correo, "session restored from disk");
                    *self.user.write().expect("session lock poisoned") = Some(user);
                    return;
                }
                match self.auth.me().await {
                    Ok(user) => {
                        tracing::info!(correo = %user.correo, "session restored from backend");
                        self.persist(&user);
                        *self.user.write().expect("session lock poisoned") = Some(user);
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "no session to restore");
                    }
                }
            })
            .await;
        self.current_user()
    }

    /// Login and persist the authenticated user.
    pub async fn login(&self, correo: &str, contrasena: &str) -> ServiceResult<User> {
        let request = LoginRequest {
            correo: correo.to_string(),
            contrasena: contrasena.to_string(),
        };
        let response = self.auth.login(&request).await?;
        self.persist(&response.user);
        *self.user.write().expect("session lock poisoned") = Some(response.user.clone());
        Ok(response.user)
    }

    /// Register a new account; the backend logs the new user in, so the
    /// session is stored the same way as after a login.
    pub async fn register(
        &self,
        nombre_completo: &str,
        correo: &str,
        contrasena: &str,
    ) -> ServiceResult<User> {
        let request = RegisterRequest {
            nombre_completo: nombre_completo.to_string(),
            correo: correo.to_string(),
            contrasena: contrasena.to_string(),
        };
        let response = self.auth.register(&request).await?;
        self.persist(&response.user);
        *self.user.write().expect("session lock poisoned") = Some(response.user.clone());
        Ok(response.user)
    }

    /// Logout. Local state and the persisted record are cleared even when the
    /// backend call fails; the error is still reported to the caller.
    pub async fn logout(&self) -> ServiceResult<()> {
        let result = self.auth.logout().await;
        *self.user.write().expect("session lock poisoned") = None;
        self.clear_persisted();
        tracing::info!("session cleared");
        result
    }

    pub fn current_user(&self) -> Option<User> {
        self.user.read().expect("session lock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().expect("session lock poisoned").is_some()
    }

    fn load_persisted(&self) -> Option<User> {
        let path = self.session_file.as_ref()?;
        let content = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable session record");
                None
            }
        }
    }

    fn persist(&self, user: &User) {
        let Some(path) = self.session_file.as_ref() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "failed to create session directory");
                return;
            }
        }
        match serde_json::to_string_pretty(user) {
            Ok(content) => {
                if let Err(e) = std::fs::write(path, content) {
                    tracing::warn!(error = %e, "failed to persist session");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize session"),
        }
    }

    fn clear_persisted(&self) {
        if let Some(path) = self.session_file.as_ref() {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(path) {
                    tracing::warn!(error = %e, "failed to remove session record");
                }
            }
        }
    }
}
