//! Task Store Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and the in-memory store
//! - handlers: REST handlers
//!
//! Routes (all under `/api`):
//! - GET /tasks - List tasks
//! - POST /tasks - Create a task
//! - PUT /tasks/{id} - Patch text and/or completion
//! - DELETE /tasks/{id} - Delete a task

use std::sync::Arc;

use axum::{routing::{get, put}, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod domain;
pub mod handlers;
pub mod repository;

pub use config::{ConfigError, ServerConfig};

use domain::Task;
use repository::{InMemoryTaskRepository, Repository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub task_repo: Arc<dyn Repository<Task>>,
}

impl AppState {
    pub fn new(task_repo: Arc<dyn Repository<Task>>) -> Self {
        Self { task_repo }
    }

    /// State over a fresh in-memory store holding the seed tasks
    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryTaskRepository::seeded()))
    }
}

/// Build the REST API router; any origin may call it
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route("/tasks/{id}", put(handlers::update_task).delete(handlers::delete_task));

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Serve until Ctrl+C / SIGTERM
pub async fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr()?;
    let state = AppState::seeded();

    let app = router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server is running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
