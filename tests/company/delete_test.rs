use axum::http::{header::AUTHORIZATION, StatusCode};
use std::sync::Arc;
use uuid::Uuid;

use crate::common::{bearer, error_code, sample_company, FailingCompanies, SlowCompanies, TestContext};

#[tokio::test]
async fn delete_removes_company() {
    let ctx = TestContext::new();
    let token = ctx.login().await;
    let id = Uuid::new_v4();
    ctx.store.insert(sample_company(id));

    ctx.server
        .delete(&format!("/v1/company/{}", id))
        .add_header(AUTHORIZATION, bearer(&token))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert!(ctx.store.get(id).is_none());

    ctx.server
        .get(&format!("/v1/company/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let ctx = TestContext::new();
    let token = ctx.login().await;
    let id = Uuid::new_v4();
    ctx.store.insert(sample_company(id));

    for _ in 0..2 {
        ctx.server
            .delete(&format!("/v1/company/{}", id))
            .add_header(AUTHORIZATION, bearer(&token))
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }

    assert_eq!(ctx.store.len(), 0);
}

#[tokio::test]
async fn delete_leaves_other_companies() {
    let ctx = TestContext::new();
    let token = ctx.login().await;
    let keep = Uuid::new_v4();
    let drop = Uuid::new_v4();
    ctx.store.insert(sample_company(keep));
    ctx.store.insert(sample_company(drop));

    ctx.server
        .delete(&format!("/v1/company/{}", drop))
        .add_header(AUTHORIZATION, bearer(&token))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert!(ctx.store.get(keep).is_some());
    assert_eq!(ctx.store.len(), 1);
}

#[tokio::test]
async fn delete_with_invalid_id_returns_bad_request() {
    let ctx = TestContext::new();
    let token = ctx.login().await;

    let response = ctx
        .server
        .delete("/v1/company/42")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response.json()), 20000);
}

#[tokio::test]
async fn delete_when_store_fails_returns_server_error() {
    let ctx = TestContext::with_repository(Arc::new(FailingCompanies));
    let token = ctx.login().await;

    let response = ctx
        .server
        .delete(&format!("/v1/company/{}", Uuid::new_v4()))
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_code(&response.json()), 20005);
}

#[tokio::test]
async fn delete_that_outlives_the_deadline_returns_server_error() {
    let ctx = TestContext::with_repository(Arc::new(SlowCompanies));
    let token = ctx.login().await;

    let response = ctx
        .server
        .delete(&format!("/v1/company/{}", Uuid::new_v4()))
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_code(&response.json()), 20005);
}
