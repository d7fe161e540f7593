//! Web layer - HTTP interface for the recommendation page.
//!
//! This module exposes the HTML page, a small JSON API, and the shared state
//! every handler receives. Business rules live in `crate::core`; handlers only
//! translate between HTTP and those functions.

/// Request handlers
pub mod handlers;
/// HTML rendering of the recommendation page
pub mod render;

use crate::cache::GoalCache;
use crate::config::AppConfig;
use crate::errors::{Error, Result};
use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use sea_orm::DatabaseConnection;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Shared data available to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all reads
    pub database: DatabaseConnection,
    /// Memoized goal list
    pub goals: Arc<GoalCache>,
    /// Process settings
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Creates the state with an empty goal cache.
    #[must_use]
    pub fn new(database: DatabaseConnection, config: Arc<AppConfig>) -> Self {
        Self {
            database,
            goals: Arc::new(GoalCache::new()),
            config,
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/goals", get(handlers::goals))
        .route("/api/recommendations", get(handlers::recommendations))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Binds `addr` and serves until the process stops.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if matches!(self, Self::InvalidLimit { .. }) {
            return (StatusCode::BAD_REQUEST, self.to_string()).into_response();
        }
        error!("Request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Les données sont momentanément indisponibles.",
        )
            .into_response()
    }
}
