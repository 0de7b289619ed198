//! Link shortening, resolution and statistics service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::base62::is_base62;
use crate::utils::url_validator::validate_url;

/// Service for creating and looking up short links.
///
/// Validates destinations before they reach the store and turns missing
/// slugs into [`AppError::NotFound`].
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Shortens a destination URL.
    ///
    /// The URL is stored as given, minus surrounding whitespace. Every call
    /// creates a new link, so shortening the same URL twice yields two slugs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty, malformed or not
    /// http(s). Returns [`AppError::Internal`] on database errors.
    pub async fn shorten(&self, original_url: &str) -> Result<Link, AppError> {
        validate_url(original_url)?;

        let link = self
            .link_repository
            .create(NewLink::new(original_url.trim()))
            .await?;

        tracing::info!(slug = %link.slug, id = link.id, "Short link created");

        Ok(link)
    }

    /// Resolves a slug for redirection, counting the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this slug; nothing is
    /// modified in that case. Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, slug: &str) -> Result<Link, AppError> {
        if !is_base62(slug) {
            return Err(not_found(slug));
        }

        self.link_repository
            .record_click(slug)
            .await?
            .ok_or_else(|| not_found(slug))
    }

    /// Returns a link's current state without counting a visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this slug.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_stats(&self, slug: &str) -> Result<Link, AppError> {
        if !is_base62(slug) {
            return Err(not_found(slug));
        }

        self.link_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| not_found(slug))
    }

    /// Checks that the underlying store answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}

fn not_found(slug: &str) -> AppError {
    tracing::debug!(slug, "Short link not found");
    AppError::not_found("Short link not found")
}

/// Builds the public short URL for a slug.
///
/// A trailing slash on `base_url` is ignored.
pub fn short_url(base_url: &str, slug: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), slug)
}
