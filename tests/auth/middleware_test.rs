use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{Duration, Utc};
use company_service::services::jwt::JwtService;
use serde_json::json;
use uuid::Uuid;

use crate::common::{bearer, company_payload, error_code, jwt_service, TestContext};

#[tokio::test]
async fn missing_header_returns_unauthorized() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/v1/company")
        .json(&company_payload(Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&response.json()), 10006);
    assert_eq!(ctx.store.len(), 0);
}

#[tokio::test]
async fn non_bearer_scheme_returns_bad_request() {
    let ctx = TestContext::new();
    let token = ctx.login().await;

    let response = ctx
        .server
        .post("/v1/company")
        .add_header(AUTHORIZATION, HeaderValue::from_str(&format!("Token {}", token)).unwrap())
        .json(&company_payload(Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response.json()), 30002);
    assert_eq!(ctx.store.len(), 0);
}

#[tokio::test]
async fn extra_header_segments_return_bad_request() {
    let ctx = TestContext::new();
    let token = ctx.login().await;

    let response = ctx
        .server
        .delete(&format!("/v1/company/{}", Uuid::new_v4()))
        .add_header(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {} extra", token)).unwrap())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response.json()), 30002);
}

#[tokio::test]
async fn wrong_signature_returns_unauthorized() {
    let ctx = TestContext::new();
    let forged = JwtService::new("someone-else".to_string(), 24).issue("xm").unwrap();

    let response = ctx
        .server
        .delete(&format!("/v1/company/{}", Uuid::new_v4()))
        .add_header(AUTHORIZATION, bearer(&forged.token))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&response.json()), 10006);
}

#[tokio::test]
async fn expired_token_returns_unauthorized() {
    let ctx = TestContext::new();
    let expired = jwt_service()
        .issue_until("xm", Utc::now() - Duration::minutes(1))
        .unwrap();

    let response = ctx
        .server
        .patch(&format!("/v1/company/{}", Uuid::new_v4()))
        .add_header(AUTHORIZATION, bearer(&expired.token))
        .json(&json!({"employees": 1}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&response.json()), 10006);
}

#[tokio::test]
async fn unexpected_algorithm_returns_unauthorized() {
    let ctx = TestContext::new();

    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#);
    let claims = URL_SAFE_NO_PAD.encode(
        json!({"username": "xm", "exp": (Utc::now() + Duration::hours(1)).timestamp()}).to_string(),
    );
    let signature = URL_SAFE_NO_PAD.encode("not-a-signature");
    let token = format!("{}.{}.{}", header, claims, signature);

    let response = ctx
        .server
        .delete(&format!("/v1/company/{}", Uuid::new_v4()))
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&response.json()), 10006);
}

#[tokio::test]
async fn unparsable_token_returns_bad_request() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .delete(&format!("/v1/company/{}", Uuid::new_v4()))
        .add_header(AUTHORIZATION, bearer("garbage"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response.json()), 30002);
}

#[tokio::test]
async fn reads_do_not_require_a_token() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get(&format!("/v1/company/{}", Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(error_code(&response.json()), 20007);
}

#[tokio::test]
async fn valid_token_reaches_the_handler() {
    let ctx = TestContext::new();
    let token = ctx.login().await;

    let response = ctx
        .server
        .delete(&format!("/v1/company/{}", Uuid::new_v4()))
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
}
