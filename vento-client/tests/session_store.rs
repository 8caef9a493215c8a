// Session store persistence and one-shot restoration tests.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use vento_client::{AuthService, ClientConfig, SessionStore};

async fn spawn(router: Router) -> String {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn store_for(config: &ClientConfig) -> SessionStore {
    SessionStore::new(config, AuthService::new(config.build_http_client()))
}

fn user_json() -> Value {
    json!({
        "id": "1",
        "nombreCompleto": "Administrador",
        "correo": "admin@vento.com",
        "rol": "Administrador"
    })
}

#[tokio::test]
async fn login_persists_and_logout_clears() {
    async fn login(Json(_): Json<Value>) -> Json<Value> {
        Json(json!({ "token": "t0k3n", "user": {
            "id": "1",
            "nombreCompleto": "Administrador",
            "correo": "admin@vento.com",
            "rol": "Administrador"
        }}))
    }
    async fn logout() -> StatusCode {
        StatusCode::OK
    }

    let router = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout/secure", post(logout));
    let base = spawn(router).await;

    let dir = TempDir::new().unwrap();
    let session_file = dir.path().join("session.json");
    let config = ClientConfig::new(base.as_str()).with_session_file(&session_file);
    let store = store_for(&config);

    let user = store.login("admin@vento.com", "admin123").await.unwrap();
    assert_eq!(user.nombre_completo, "Administrador");
    assert!(store.is_authenticated());
    assert!(session_file.exists());

    let on_disk: Value =
        serde_json::from_str(&std::fs::read_to_string(&session_file).unwrap()).unwrap();
    assert_eq!(on_disk["correo"], "admin@vento.com");

    store.logout().await.unwrap();
    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
    assert!(!session_file.exists());
}

#[tokio::test]
async fn restore_prefers_the_persisted_record() {
    #[derive(Clone)]
    struct AppState {
        me_hits: Arc<AtomicUsize>,
    }

    async fn me(State(state): State<AppState>) -> Json<Value> {
        state.me_hits.fetch_add(1, Ordering::SeqCst);
        Json(json!({ "id": "1", "nombreCompleto": "Administrador", "correo": "admin@vento.com" }))
    }

    let state = AppState {
        me_hits: Arc::new(AtomicUsize::new(0)),
    };
    let router = Router::new()
        .route("/auth/me", get(me))
        .with_state(state.clone());
    let base = spawn(router).await;

    let dir = TempDir::new().unwrap();
    let session_file = dir.path().join("session.json");
    std::fs::write(&session_file, user_json().to_string()).unwrap();

    let config = ClientConfig::new(base.as_str()).with_session_file(&session_file);
    let store = store_for(&config);

    let user = store.restore().await.unwrap();
    assert_eq!(user.correo, "admin@vento.com");
    // The disk copy answered; the backend was never asked
    assert_eq!(state.me_hits.load(Ordering::SeqCst), 0);

    store.restore().await.unwrap();
    assert_eq!(state.me_hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn restore_falls_back_to_the_backend_exactly_once() {
    #[derive(Clone)]
    struct AppState {
        me_hits: Arc<AtomicUsize>,
    }

    async fn me(State(state): State<AppState>) -> Json<Value> {
        state.me_hits.fetch_add(1, Ordering::SeqCst);
        Json(json!({ "id": "2", "nombreCompleto": "Juan Pérez", "correo": "cajero@vento.com" }))
    }

    let state = AppState {
        me_hits: Arc::new(AtomicUsize::new(0)),
    };
    let router = Router::new()
        .route("/auth/me", get(me))
        .with_state(state.clone());
    let base = spawn(router).await;

    let dir = TempDir::new().unwrap();
    let session_file = dir.path().join("session.json");
    let config = ClientConfig::new(base.as_str()).with_session_file(&session_file);
    let store = store_for(&config);

    let user = store.restore().await.unwrap();
    assert_eq!(user.nombre_completo, "Juan Pérez");
    assert_eq!(state.me_hits.load(Ordering::SeqCst), 1);
    // The recovered session is persisted for the next load
    assert!(session_file.exists());

    // Guarded: a second restore does not probe again
    store.restore().await.unwrap();
    assert_eq!(state.me_hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn restore_without_a_session_settles_on_none() {
    #[derive(Clone)]
    struct AppState {
        me_hits: Arc<AtomicUsize>,
    }

    async fn me(State(state): State<AppState>) -> StatusCode {
        state.me_hits.fetch_add(1, Ordering::SeqCst);
        StatusCode::UNAUTHORIZED
    }

    let state = AppState {
        me_hits: Arc::new(AtomicUsize::new(0)),
    };
    let router = Router::new()
        .route("/auth/me", get(me))
        .with_state(state.clone());
    let base = spawn(router).await;

    let dir = TempDir::new().unwrap();
    let config =
        ClientConfig::new(base.as_str()).with_session_file(dir.path().join("session.json"));
    let store = store_for(&config);

    assert!(store.restore().await.is_none());
    assert!(!store.is_authenticated());

    // The outcome is cached; the check ran exactly once for this load
    assert!(store.restore().await.is_none());
    assert_eq!(state.me_hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_login_leaves_the_store_unauthenticated() {
    async fn login(Json(_): Json<Value>) -> (StatusCode, Json<Value>) {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Credenciales inválidas" })),
        )
    }

    let base = spawn(Router::new().route("/auth/login", post(login))).await;
    let dir = TempDir::new().unwrap();
    let session_file = dir.path().join("session.json");
    let config = ClientConfig::new(base.as_str()).with_session_file(&session_file);
    let store = store_for(&config);

    let err = store.login("admin@vento.com", "wrong").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!store.is_authenticated());
    assert!(!session_file.exists());
}
