mod common;

use axum_test::TestServer;
use serde_json::{Value, json};
use shortkey::routes::build_router;

fn server() -> TestServer {
    let state = common::create_test_state_with_base(common::TEST_BASE);
    TestServer::new(build_router(state, false)).unwrap()
}

async fn shorten_all(server: &TestServer, urls: &[&str]) {
    for url in urls {
        server
            .post("/shorten")
            .json(&json!({ "url": url }))
            .await
            .assert_status_ok();
    }
}

#[tokio::test]
async fn test_domain_counts_empty() {
    let server = server();

    let response = server.get("/domain-counts").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_domain_counts_single_url() {
    let server = server();
    shorten_all(&server, &["https://example.com/a"]).await;

    let body = server.get("/domain-counts").await.json::<Value>();

    assert_eq!(body, json!([{ "domain": "example.com", "count": 1 }]));
}

#[tokio::test]
async fn test_domain_counts_repeat_shorten_does_not_count() {
    let server = server();
    shorten_all(
        &server,
        &["https://example.com/a", "https://example.com/a"],
    )
    .await;

    let body = server.get("/domain-counts").await.json::<Value>();

    assert_eq!(body[0]["count"], 1);
}

#[tokio::test]
async fn test_domain_counts_strips_www() {
    let server = server();
    shorten_all(
        &server,
        &["https://www.example.com/a", "https://example.com/b"],
    )
    .await;

    let body = server.get("/domain-counts").await.json::<Value>();

    assert_eq!(body, json!([{ "domain": "example.com", "count": 2 }]));
}

#[tokio::test]
async fn test_domain_counts_top_four_sorted() {
    let server = server();
    shorten_all(
        &server,
        &[
            "https://a.com/1",
            "https://a.com/2",
            "https://a.com/3",
            "https://b.com/1",
            "https://b.com/2",
            "https://c.com/1",
            "https://c.com/2",
            "https://c.com/3",
            "https://c.com/4",
            "https://d.com/1",
            "https://e.com/1",
            "https://e.com/2",
        ],
    )
    .await;

    let body = server.get("/domain-counts").await.json::<Value>();
    let items = body.as_array().unwrap();

    assert_eq!(items.len(), 4);
    assert_eq!(items[0], json!({ "domain": "c.com", "count": 4 }));
    assert_eq!(items[1], json!({ "domain": "a.com", "count": 3 }));
    assert_eq!(items[2], json!({ "domain": "b.com", "count": 2 }));
    assert_eq!(items[3], json!({ "domain": "e.com", "count": 2 }));
}
