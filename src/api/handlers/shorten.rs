//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::shorten::{MISSING_URL_MESSAGE, ShortenRequest, ShortenResponse};
use crate::application::services::short_url;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://127.0.0.1:5023/1", "slug": "1" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, `url` is missing, or the
/// URL is not a valid http(s) URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected shorten request body");
        AppError::bad_request(MISSING_URL_MESSAGE)
    })?;
    payload.validate()?;

    let url = payload.url.unwrap_or_default();
    let link = state.link_service.shorten(&url).await?;

    Ok(Json(ShortenResponse {
        short_url: short_url(&state.base_url, &link.slug),
        slug: link.slug,
    }))
}
