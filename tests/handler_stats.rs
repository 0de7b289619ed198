mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tinylink::api::handlers::stats_handler;

fn create_test_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/stats/{slug}", get(stats_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_stats_fresh_link(pool: SqlitePool) {
    let link = common::create_test_link(&pool, "https://example.com").await;
    let server = create_test_server(pool);

    let response = server.get(&format!("/stats/{}", link.slug)).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["slug"], link.slug);
    assert_eq!(json["original_url"], "https://example.com");
    assert_eq!(json["clicks"], 0);

    let created_at = json["created_at"].as_str().unwrap();
    assert!(created_at.ends_with('Z'));
    let parsed: DateTime<Utc> = created_at.parse().unwrap();
    assert!((parsed - link.created_at).num_milliseconds().abs() < 1);
}

#[sqlx::test]
async fn test_stats_reflects_clicks_and_does_not_count(pool: SqlitePool) {
    let link = common::create_test_link(&pool, "https://example.com").await;
    sqlx::query("UPDATE links SET clicks = 4 WHERE slug = ?")
        .bind(&link.slug)
        .execute(&pool)
        .await
        .unwrap();
    let server = create_test_server(pool.clone());

    for _ in 0..2 {
        let json = server
            .get(&format!("/stats/{}", link.slug))
            .await
            .json::<serde_json::Value>();
        assert_eq!(json["clicks"], 4);
    }

    assert_eq!(common::fetch_clicks(&pool, &link.slug).await, 4);
}

#[sqlx::test]
async fn test_stats_not_found(pool: SqlitePool) {
    let server = create_test_server(pool);

    let response = server.get("/stats/zzzzzz").await;
    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert!(json["error"].is_string());
}
