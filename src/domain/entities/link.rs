//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

use crate::utils::base62;

/// A stored short link.
///
/// `slug` always equals `base62(id)`. Only `clicks` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        slug: String,
        original_url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            slug,
            original_url,
            clicks,
            created_at,
        }
    }

    /// Returns true if the slug is the base62 encoding of the id.
    pub fn has_derived_slug(&self) -> bool {
        u64::try_from(self.id).is_ok_and(|id| base62::encode(id) == self.slug)
    }

    /// Creation time rendered as ISO-8601 with microseconds and a `Z` suffix,
    /// e.g. `2024-05-01T10:20:30.123456Z`.
    pub fn created_at_iso(&self) -> String {
        self.created_at
            .format("%Y-%m-%dT%H:%M:%S%.6fZ")
            .to_string()
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl NewLink {
    /// Creates link input stamped with the current time.
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            created_at: Utc::now(),
        }
    }
}
