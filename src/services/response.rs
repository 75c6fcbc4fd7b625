use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

// =============================================================================
// MESSAGE CODES
// =============================================================================

/// Stable (code, description, message) triples returned to clients.
/// Generic codes are 100xx, company codes 200xx, auth codes 300xx.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCode {
    GenericSuccess,
    GenericError,
    GenericBadRequest,
    GenericServerError,
    GenericHealthError,
    GenericNotAuthorized,

    InvalidCompanyId,
    CompanyGetError,
    InvalidCompanyPayload,
    CompanyCreateError,
    CompanyAlreadyExists,
    CompanyDeleteError,
    CompanyPatchError,
    CompanyNotFound,

    LoginCredentialsError,
    LoginUnauthorized,
    BadAuthenticationHeader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseMessage {
    pub code: u32,
    pub description: &'static str,
    pub message: &'static str,
}

impl MessageCode {
    pub fn message(self) -> ResponseMessage {
        let (code, description, message) = match self {
            Self::GenericSuccess => (10000, "GenericSuccess", "Request completed"),
            Self::GenericError => (10001, "GenericError", "Request failed"),
            Self::GenericBadRequest => (10002, "GenericBadRequest", "Bad request"),
            Self::GenericServerError => (10003, "GenericServerError", "Server Error"),
            Self::GenericHealthError => (10005, "GenericHealthError", "Health check failed"),
            Self::GenericNotAuthorized => (10006, "GenericNotAuthorized", "Not authorized"),

            Self::InvalidCompanyId => (20000, "InvalidCompanyID", "Invalid company ID"),
            Self::CompanyGetError => (20001, "CompanyGetError", "Failed to get company"),
            Self::InvalidCompanyPayload => (20002, "InvalidCompanyPayload", "Invalid company payload"),
            Self::CompanyCreateError => (20003, "CompanyCreateError", "Failed to create company"),
            Self::CompanyAlreadyExists => (20004, "CompanyAlreadyExists", "Company already exists"),
            Self::CompanyDeleteError => (20005, "CompanyDeleteError", "Failed to delete company"),
            Self::CompanyPatchError => (20006, "CompanyPatchError", "Failed to patch company"),
            Self::CompanyNotFound => (20007, "CompanyNotFound", "Company not found"),

            Self::LoginCredentialsError => (30000, "LoginCredentialsError", "Failed to decode credentials"),
            Self::LoginUnauthorized => (30001, "LoginUnauthorized", "User is not authorized"),
            Self::BadAuthenticationHeader => (30002, "BadAuthenticationHeader", "Bad authentication header"),
        };

        ResponseMessage {
            code,
            description,
            message,
        }
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

#[derive(Debug, Serialize)]
pub struct Meta {
    pub success: bool,
}

/// Uniform body for every response: `{ data?, meta: {success}, errors? }`
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub meta: Meta,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseMessage>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: Option<T>) -> Self {
        Self {
            data,
            meta: Meta { success: true },
            errors: Vec::new(),
        }
    }
}

impl Envelope<()> {
    pub fn failure(code: MessageCode) -> Self {
        Self {
            data: None,
            meta: Meta { success: false },
            errors: vec![code.message()],
        }
    }
}

// =============================================================================
// HANDLER RESULTS
// =============================================================================

#[derive(Debug)]
pub struct ApiSuccess<T: Serialize> {
    status: StatusCode,
    data: Option<T>,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data: Some(data),
        }
    }
}

impl ApiSuccess<()> {
    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        // 204 carries no body
        if self.status == StatusCode::NO_CONTENT {
            return self.status.into_response();
        }

        (self.status, Json(Envelope::success(self.data))).into_response()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiFailure {
    pub status: StatusCode,
    pub code: MessageCode,
}

impl ApiFailure {
    pub fn new(status: StatusCode, code: MessageCode) -> Self {
        Self { status, code }
    }

    pub fn bad_request(code: MessageCode) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code)
    }

    pub fn unauthorized(code: MessageCode) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, code)
    }

    pub fn not_found(code: MessageCode) -> Self {
        Self::new(StatusCode::NOT_FOUND, code)
    }

    pub fn internal(code: MessageCode) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, code)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(Envelope::failure(self.code))).into_response()
    }
}

pub type ApiResult<T> = Result<ApiSuccess<T>, ApiFailure>;

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiFailure {
    ApiFailure::not_found(MessageCode::GenericError)
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> ApiFailure {
    ApiFailure::new(StatusCode::METHOD_NOT_ALLOWED, MessageCode::GenericError)
}
