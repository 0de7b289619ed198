//! DTOs for link statistics.

use serde::Serialize;

use crate::domain::entities::Link;

/// Current state of a short link.
///
/// ```json
/// {
///   "slug": "1",
///   "original_url": "https://example.com",
///   "clicks": 3,
///   "created_at": "2024-05-01T10:20:30.123456Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub slug: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: String,
}

impl From<Link> for StatsResponse {
    fn from(link: Link) -> Self {
        let created_at = link.created_at_iso();
        Self {
            slug: link.slug,
            original_url: link.original_url,
            clicks: link.clicks,
            created_at,
        }
    }
}
