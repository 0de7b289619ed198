//! Utility functions for slug generation and URL validation.
//!
//! - [`base62`] - Slug encoding of row identifiers
//! - [`url_validator`] - Destination URL validation

pub mod base62;
pub mod url_validator;
