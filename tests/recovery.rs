use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use serde_json::Value;
use shortkey::api::middleware::recovery;

async fn panicking_handler() -> &'static str {
    panic!("boom")
}

async fn healthy_handler() -> &'static str {
    "ok"
}

fn server() -> TestServer {
    let app = Router::new()
        .route("/panic", get(panicking_handler))
        .route("/ok", get(healthy_handler))
        .layer(recovery::layer());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_panic_becomes_internal_error() {
    let server = server();

    let response = server.get("/panic").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["message"], "Internal Server Error");
}

#[tokio::test]
async fn test_server_keeps_serving_after_panic() {
    let server = server();

    server
        .get("/panic")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let response = server.get("/ok").await;
    response.assert_status_ok();
    response.assert_text("ok");
}
