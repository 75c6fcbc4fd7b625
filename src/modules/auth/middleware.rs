use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::AppState;
use crate::modules::auth::model::AuthUser;
use crate::services::request::RequestId;
use crate::services::response::{ApiFailure, MessageCode};

const BEARER: &str = "Bearer";

#[derive(Debug, PartialEq, Eq)]
pub enum BearerError {
    Missing,
    Malformed,
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(BearerError::Missing),
    };

    let value = value.to_str().map_err(|_| BearerError::Malformed)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER), Some(token), None) => Ok(token),
        _ => Err(BearerError::Malformed),
    }
}

/// Rejects requests without a valid bearer token; on success the token's
/// username is attached to the request as [`AuthUser`].
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiFailure> {
    let component = "JWTAuthToken";

    let token = bearer_token(request.headers()).map_err(|e| match e {
        BearerError::Missing => {
            tracing::warn!(%request_id, component, "missing authorization header");
            ApiFailure::unauthorized(MessageCode::GenericNotAuthorized)
        }
        BearerError::Malformed => {
            tracing::warn!(%request_id, component, "wrong authorization header format");
            ApiFailure::bad_request(MessageCode::BadAuthenticationHeader)
        }
    })?;

    let claims = state.auth.jwt().verify(token).map_err(|e| {
        tracing::warn!(%request_id, component, error = %e, "token rejected");
        if e.is_verification_failure() {
            ApiFailure::unauthorized(MessageCode::GenericNotAuthorized)
        } else {
            ApiFailure::bad_request(MessageCode::BadAuthenticationHeader)
        }
    })?;

    request.extensions_mut().insert(AuthUser {
        username: claims.username,
    });

    Ok(next.run(request).await)
}
