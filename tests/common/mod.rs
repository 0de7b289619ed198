#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;
use std::path::PathBuf;
use tinylink::application::services::LinkService;
use tinylink::config::Config;
use tinylink::domain::entities::{Link, NewLink};
use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::persistence::SqliteLinkRepository;
use tinylink::server::connect_database;
use tinylink::state::AppState;

pub const TEST_BASE_URL: &str = "http://127.0.0.1:5023";

pub fn create_test_repository(pool: SqlitePool) -> SqliteLinkRepository {
    SqliteLinkRepository::new(Arc::new(pool))
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let link_repo = Arc::new(create_test_repository(pool));
    let link_service = Arc::new(LinkService::new(link_repo));

    AppState::new(link_service, TEST_BASE_URL)
}

pub async fn create_test_link(pool: &SqlitePool, url: &str) -> Link {
    create_test_repository(pool.clone())
        .create(NewLink::new(url))
        .await
        .unwrap()
}

pub async fn fetch_clicks(pool: &SqlitePool, slug: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE slug = ?")
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// File-backed database opened with the same pool settings the server uses.
pub struct ServerDatabase {
    pub pool: SqlitePool,
    path: PathBuf,
}

impl ServerDatabase {
    pub async fn open(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "tinylink-test-{}-{}.db",
            name,
            std::process::id()
        ));
        remove_db_files(&path);

        let config = Config {
            database_url: format!("sqlite://{}", path.display()),
            ..Config::default()
        };
        let pool = connect_database(&config).await.unwrap();

        Self { pool, path }
    }

    pub async fn close(self) {
        self.pool.close().await;
        remove_db_files(&self.path);
    }
}

fn remove_db_files(path: &std::path::Path) {
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
    }
}
