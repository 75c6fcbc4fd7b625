use axum::http::{header::AUTHORIZATION, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{bearer, company_payload, TestContext};

#[tokio::test]
async fn login_create_read_patch_delete() {
    let ctx = TestContext::new();
    let id = Uuid::new_v4();
    let path = format!("/v1/company/{}", id);

    let login = ctx
        .server
        .post("/v1/login")
        .json(&json!({"username": "xm", "password": "xm123"}))
        .await;
    login.assert_status(StatusCode::OK);
    let token = login.json::<Value>()["data"]["token"].as_str().unwrap().to_string();

    ctx.server
        .post("/v1/company")
        .json(&company_payload(id))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    ctx.server
        .post("/v1/company")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&company_payload(id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let created = ctx.server.get(&path).await;
    created.assert_status(StatusCode::OK);
    assert_eq!(created.json::<Value>()["data"], company_payload(id));

    ctx.server
        .patch(&path)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({"employees": 50}))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let patched = ctx.server.get(&path).await;
    patched.assert_status(StatusCode::OK);

    let mut expected = company_payload(id);
    expected["employees"] = json!(50);
    assert_eq!(patched.json::<Value>()["data"], expected);

    ctx.server
        .delete(&path)
        .add_header(AUTHORIZATION, bearer(&token))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    ctx.server
        .get(&path)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
