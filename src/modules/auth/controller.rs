use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
};
use std::sync::Arc;

use crate::AppState;
use crate::modules::auth::{
    interface::AuthError,
    schema::{LoginRequest, LoginResponse},
};
use crate::services::request::{json_body, RequestId};
use crate::services::response::{ApiFailure, ApiResult, ApiSuccess, MessageCode};

// =============================================================================
// POST /v1/login - Exchange credentials for a bearer token
// =============================================================================

pub async fn login(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<LoginResponse> {
    let component = "Login";

    let creds: LoginRequest = json_body(body).map_err(|e| {
        tracing::error!(%request_id, component, error = %e, "failed to decode credentials");
        ApiFailure::bad_request(MessageCode::LoginCredentialsError)
    })?;

    let issued = state
        .auth
        .login(&creds.username, &creds.password)
        .map_err(|e| match e {
            AuthError::InvalidCredentials => {
                tracing::error!(%request_id, component, username = %creds.username, "invalid credentials for user");
                ApiFailure::unauthorized(MessageCode::LoginUnauthorized)
            }
            AuthError::Token(e) => {
                tracing::error!(%request_id, component, username = %creds.username, error = %e, "failed to sign token");
                ApiFailure::internal(MessageCode::GenericServerError)
            }
        })?;

    tracing::info!(%request_id, component, username = %creds.username, expires = %issued.expires, "user logged in");

    Ok(ApiSuccess::ok(LoginResponse {
        token: issued.token,
        expires: issued.expires,
    }))
}
