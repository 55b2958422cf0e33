//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET/POST /customers`              - Collection operations
//! - `GET/PUT  /customers/{id}`         - Item operations
//! - `DELETE   /customers/delete/{id}`  - Item deletion
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - All origins allowed
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// `state` is the shared application state injected into all handlers.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::customer_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
