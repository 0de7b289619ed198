//! Destination URL validation.
//!
//! A destination is accepted when it is non-empty, parses as an absolute URL,
//! uses the `http` or `https` scheme and names a host. Anything else is
//! rejected before it reaches the store.

use url::Url;

/// Reasons a destination URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only http and https URLs are allowed, got '{0}'")]
    UnsupportedScheme(String),

    #[error("URL must include a host")]
    MissingHost,
}

/// Validates a destination URL and returns the parsed form.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] rule the input violates.
///
/// # Examples
///
/// ```
/// use tinylink::utils::url_validator::{validate_url, UrlValidationError};
///
/// assert!(validate_url("https://example.com/page?q=1").is_ok());
/// assert_eq!(
///     validate_url("ftp://example.com"),
///     Err(UrlValidationError::UnsupportedScheme("ftp".to_string()))
/// );
/// ```
pub fn validate_url(input: &str) -> Result<Url, UrlValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}

/// Returns true if `input` is an acceptable destination URL.
pub fn is_valid_url(input: &str) -> bool {
    validate_url(input).is_ok()
}
