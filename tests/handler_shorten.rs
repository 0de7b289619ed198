mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;
use tinylink::api::handlers::shorten_handler;
use tinylink::utils::base62::is_base62;

fn create_test_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_shorten_first_link_gets_slug_1(pool: SqlitePool) {
    let server = create_test_server(pool);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "short_url": "http://127.0.0.1:5023/1",
        "slug": "1"
    }));
}

#[sqlx::test]
async fn test_shorten_with_query_string(pool: SqlitePool) {
    let server = create_test_server(pool.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/page?q=1" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let slug = json["slug"].as_str().unwrap();
    assert!(is_base62(slug));

    let stored: String = sqlx::query_scalar("SELECT original_url FROM links WHERE slug = ?")
        .bind(slug)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "https://example.com/page?q=1");
}

#[sqlx::test]
async fn test_shorten_twice_gives_distinct_slugs(pool: SqlitePool) {
    let server = create_test_server(pool);

    let first = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["slug"], "1");
    assert_eq!(second["slug"], "2");
    assert_ne!(first["short_url"], second["short_url"]);
}

#[sqlx::test]
async fn test_shorten_rejects_invalid_urls(pool: SqlitePool) {
    let server = create_test_server(pool.clone());

    for url in ["not a url", "ftp://example.com", "", "   ", "javascript:alert(1)"] {
        let response = server.post("/shorten").json(&json!({ "url": url })).await;

        response.assert_status_bad_request();
        let json = response.json::<serde_json::Value>();
        assert!(json["error"].is_string(), "{url:?} should carry an error message");
    }

    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_missing_url(pool: SqlitePool) {
    let server = create_test_server(pool);

    let response = server.post("/shorten").json(&json!({})).await;

    response.assert_status_bad_request();
    response.assert_json(&json!({
        "error": "Provide a valid http(s) URL in JSON: {\"url\": \"...\"}"
    }));
}

#[sqlx::test]
async fn test_shorten_non_json_body(pool: SqlitePool) {
    let server = create_test_server(pool);

    let response = server.post("/shorten").text("https://example.com").await;
    response.assert_status_bad_request();

    let response = server.post("/shorten").json(&json!({ "url": 42 })).await;
    response.assert_status_bad_request();
}
