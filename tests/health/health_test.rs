use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{error_code, TestContext};

#[tokio::test]
async fn healthy_database_returns_no_content() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/v1/health").await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn unreachable_database_returns_server_error() {
    let ctx = TestContext::unhealthy();

    let response = ctx.server.get("/v1/health").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["meta"]["success"], false);
    assert_eq!(error_code(&body), 10005);
    assert_eq!(body["errors"][0]["description"], "GenericHealthError");
}
