//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Message returned when the request carries no usable `url`.
pub const MISSING_URL_MESSAGE: &str = r#"Provide a valid http(s) URL in JSON: {"url": "..."}"#;

/// Request to shorten a URL.
///
/// ```json
/// { "url": "https://example.com" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The destination to shorten. Checked in full by the link service.
    #[validate(required(message = "Provide a valid http(s) URL in JSON: {\"url\": \"...\"}"))]
    pub url: Option<String>,
}

/// Newly created short link.
///
/// ```json
/// { "short_url": "http://127.0.0.1:5023/1", "slug": "1" }
/// ```
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub slug: String,
}
