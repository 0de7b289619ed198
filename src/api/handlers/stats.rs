//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a link's stored fields without counting a visit.
///
/// # Endpoint
///
/// `GET /stats/{slug}`
///
/// # Response
///
/// ```json
/// {
///   "slug": "1",
///   "original_url": "https://example.com",
///   "clicks": 0,
///   "created_at": "2024-05-01T10:20:30.123456Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the slug doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.get_stats(&slug).await?;

    Ok(Json(link.into()))
}
