//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Main routes
        .route("/", get(handlers::index).post(handlers::ask))
        // API routes
        .route("/health", get(handlers::health))
        // Static routes
        .route("/favicon.ico", get(handlers::favicon))
        // Add middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        // Add state
        .with_state(state)
}
