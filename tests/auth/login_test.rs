use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{error_code, jwt_service, TestContext};

#[tokio::test]
async fn login_with_valid_credentials_returns_token() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/v1/login")
        .json(&json!({"username": "xm", "password": "xm123"}))
        .await;

    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["meta"]["success"], true);
    assert!(body.get("errors").is_none());
    assert!(body["data"]["token"].is_string());
    assert!(body["data"]["expires"].is_string());
}

#[tokio::test]
async fn issued_token_carries_username_and_one_day_expiry() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/v1/login")
        .json(&json!({"username": "panos", "password": "passwd123"}))
        .await;

    let body: Value = response.json();
    let token = body["data"]["token"].as_str().unwrap();

    let claims = jwt_service().verify(token).unwrap();
    assert_eq!(claims.username, "panos");

    let lifetime = claims.exp - claims.iat;
    assert!((24 * 3600 - 5..=24 * 3600 + 5).contains(&lifetime));
}

#[tokio::test]
async fn login_with_wrong_password_returns_unauthorized() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/v1/login")
        .json(&json!({"username": "xm", "password": "WrongPassword123!"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let body: Value = response.json();
    assert_eq!(body["meta"]["success"], false);
    assert_eq!(error_code(&body), 30001);
    assert_eq!(body["errors"][0]["description"], "LoginUnauthorized");
}

#[tokio::test]
async fn login_with_unknown_user_returns_unauthorized() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/v1/login")
        .json(&json!({"username": "nobody", "password": "xm123"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&response.json()), 30001);
}

#[tokio::test]
async fn login_with_missing_password_returns_bad_request() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/v1/login")
        .json(&json!({"username": "xm"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response.json()), 30000);
}

#[tokio::test]
async fn login_with_non_json_body_returns_bad_request() {
    let ctx = TestContext::new();

    let response = ctx.server.post("/v1/login").text("username=xm").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response.json()), 30000);
}

#[tokio::test]
async fn login_decodes_json_sent_as_form_content() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/v1/login")
        .content_type("application/x-www-form-urlencoded")
        .bytes(r#"{"username":"xm","password":"xm123"}"#.as_bytes().to_vec().into())
        .await;

    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert!(body["data"]["token"].is_string());
}

#[tokio::test]
async fn login_decodes_json_without_content_type() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/v1/login")
        .bytes(r#"{"username":"panos","password":"passwd123"}"#.as_bytes().to_vec().into())
        .await;

    response.assert_status(StatusCode::OK);
}
