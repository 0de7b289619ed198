//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`              - Landing page
//! - `POST /shorten`       - Create a short link
//! - `GET  /stats/{slug}`  - Link statistics
//! - `GET  /api/health`    - Health check
//! - `GET  /{slug}`        - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the application routes with tracing, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .merge(api::routes::routes())
        .route("/{slug}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/stats/1/` and `/1/`
/// reach the same handlers as `/stats/1` and `/1`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
