//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`  - Health check: DB, cache (public)
//! - `/api/*`       - Owner and pet lookup endpoints
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling (applied in
//!   [`crate::server::run`], outside the router)

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}
