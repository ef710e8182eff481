//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`            - Landing page
//! - `GET /sales`       - Sales dashboard (aggregation + chart payloads)
//! - `GET /health`      - Health check: database reachability (JSON)
//! - `/static/*`        - Static assets
//! - anything else      - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::extract::Request;
use axum::routing::get;
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// JSON 404 for paths outside the routing table.
async fn not_found_handler(request: Request) -> AppError {
    AppError::not_found(
        "Resource not found",
        json!({ "path": request.uri().path() }),
    )
}
