//! JSON API route configuration.

use crate::api::handlers::{health_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON endpoints.
///
/// # Endpoints
///
/// - `POST /shorten`       - Create a short link
/// - `GET  /stats/{slug}`  - Read-only statistics for a link
/// - `GET  /api/health`    - Health check
///
/// The redirect route lives in [`crate::routes`] because it must sit at the
/// root and match any single segment.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{slug}", get(stats_handler))
        .route("/api/health", get(health_handler))
}
