use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequestParts},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use std::fmt;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id of the inbound request.
///
/// Read from the id `SetRequestIdLayer` attached to the request, then the raw
/// `x-request-id` header. A fresh UUID is minted when neither is present so
/// every log line still carries an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn from_parts(parts: &Parts) -> Self {
        let from_extension = parts
            .extensions
            .get::<tower_http::request_id::RequestId>()
            .and_then(|id| id.header_value().to_str().ok());

        let from_header = || {
            parts
                .headers
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
        };

        match from_extension.or_else(from_header) {
            Some(id) if !id.is_empty() => Self(id.to_string()),
            _ => Self(Uuid::new_v4().to_string()),
        }
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    #[error("failed to read body: {0}")]
    Read(#[from] BytesRejection),

    #[error("failed to decode body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decodes a JSON request body. The declared content type is not checked.
pub fn json_body<T: DeserializeOwned>(body: Result<Bytes, BytesRejection>) -> Result<T, BodyError> {
    let bytes = body?;
    Ok(serde_json::from_slice(&bytes)?)
}
