use crate::store::TaskStore;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::{Arc, Mutex};
use tower_http::trace::TraceLayer;
use tracing::info;

mod errors;
mod handlers;
mod views;

/// Shared application state for the web server.
///
/// The store sits behind a single mutex so that concurrent requests cannot
/// interleave mid-mutation; every handler holds the lock for one bounded
/// in-memory operation.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<TaskStore>>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            store: Arc::new(Mutex::new(TaskStore::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/add", post(handlers::add))
        .route("/complete/{id}", get(handlers::complete))
        .route("/delete/{id}", get(handlers::delete))
        .route("/clear-completed", get(handlers::clear_completed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server on the given address with a fresh, empty store.
pub async fn serve(bind: &str, port: u16) -> Result<(), String> {
    let state = AppState::new();
    let app = create_router(state);
    let addr = format!("{bind}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("failed to bind to {addr}: {e}"))?;
    info!("taskflow web UI: http://{addr}");
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server error: {e}"))
}
