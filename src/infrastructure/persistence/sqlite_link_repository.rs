//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::base62;

/// Slug held by a row between insert and slug assignment. Only ever visible
/// inside the creating transaction.
const PLACEHOLDER_SLUG: &str = "";

#[derive(FromRow)]
struct LinkRow {
    id: i64,
    slug: String,
    original_url: String,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.id, r.slug, r.original_url, r.clicks, r.created_at)
    }
}

/// SQLite repository for link storage and retrieval.
///
/// All statements use bound parameters. SQLite serializes writers, so the
/// two statements of [`LinkRepository::create`] run under a single write lock.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO links (slug, original_url, clicks, created_at)
            VALUES (?, ?, 0, ?)
            RETURNING id
            "#,
        )
        .bind(PLACEHOLDER_SLUG)
        .bind(&new_link.original_url)
        .bind(new_link.created_at)
        .fetch_one(&mut *tx)
        .await?;

        let slug = u64::try_from(id)
            .map(base62::encode)
            .map_err(|_| AppError::internal("Store assigned a negative link id"))?;

        let row: LinkRow = sqlx::query_as(
            r#"
            UPDATE links SET slug = ?
            WHERE id = ?
            RETURNING id, slug, original_url, clicks, created_at
            "#,
        )
        .bind(&slug)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(
            r#"
            SELECT id, slug, original_url, clicks, created_at
            FROM links
            WHERE slug = ?
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn record_click(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(
            r#"
            UPDATE links SET clicks = clicks + 1
            WHERE slug = ?
            RETURNING id, slug, original_url, clicks, created_at
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        let rows: Vec<LinkRow> = sqlx::query_as(
            r#"
            SELECT id, slug, original_url, clicks, created_at
            FROM links
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn total_clicks(&self) -> Result<i64, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(clicks), 0) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(total)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
