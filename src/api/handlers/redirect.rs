//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its original URL, counting the visit.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL. The click counter is
/// incremented before the response is sent.
///
/// # Errors
///
/// Returns 404 Not Found if the slug doesn't exist.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve(&slug).await?;

    let location = location_header(&link.original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` value.
///
/// Plain ASCII URLs are sent as stored. Anything else goes out in its parsed
/// form, which percent-encodes non-ASCII characters.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if original_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(original_url)
    {
        return Ok(value);
    }

    Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| AppError::internal("Stored URL cannot be used as a redirect target"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_header_keeps_ascii_url_verbatim() {
        let value = location_header("https://example.com").unwrap();
        assert_eq!(value, "https://example.com");
    }

    #[test]
    fn test_location_header_encodes_non_ascii() {
        let value = location_header("https://example.com/päge").unwrap();
        assert_eq!(value, "https://example.com/p%C3%A4ge");
    }
}
