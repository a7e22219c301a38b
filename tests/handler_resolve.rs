mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use shortkey::routes::{app_router, build_router};

fn server() -> TestServer {
    let state = common::create_test_state_with_base(common::TEST_BASE);
    TestServer::new(build_router(state, false)).unwrap()
}

async fn shorten(server: &TestServer, url: &str) -> String {
    let body = server
        .post("/shorten")
        .json(&json!({ "url": url }))
        .await
        .json::<Value>();

    common::key_of(body["shortenUrl"].as_str().unwrap())
}

#[tokio::test]
async fn test_resolve_redirects_permanently() {
    let server = server();
    let key = shorten(&server, "https://example.com/a?x=1").await;

    let response = server.get(&format!("/resolve/{}", key)).await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://example.com/a?x=1");
}

#[tokio::test]
async fn test_resolve_is_repeatable() {
    let server = server();
    let key = shorten(&server, "https://example.com/a").await;

    for _ in 0..3 {
        let response = server.get(&format!("/resolve/{}", key)).await;
        response.assert_status(StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.header("location"), "https://example.com/a");
    }
}

#[tokio::test]
async fn test_resolve_unknown_key() {
    let server = server();

    let response = server.get("/resolve/does-not-exist").await;

    response.assert_status_not_found();

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(
        body["error"]["message"],
        "URL not found for the given reference key"
    );
}

#[tokio::test]
async fn test_resolve_missing_key() {
    let server = server();

    let response = server.get("/resolve").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_resolve_storage_failure() {
    let state = common::create_failing_state();
    let server = TestServer::new(build_router(state, false)).unwrap();

    let response = server.get("/resolve/anything").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let state = common::create_test_state_with_base(common::TEST_BASE);
    let app = ServiceExt::<Request>::into_make_service(app_router(state, false));
    let server = TestServer::new(app).unwrap();

    server.get("/resolve/").await.assert_status_bad_request();

    server
        .post("/shorten/")
        .json(&json!({ "url": "https://example.com/a" }))
        .await
        .assert_status_ok();

    let counts = server.get("/domain-counts/").await;
    counts.assert_status_ok();
    assert_eq!(
        counts.json::<Value>(),
        json!([{ "domain": "example.com", "count": 1 }])
    );
}
