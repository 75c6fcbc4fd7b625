use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    Extension,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use validator::Validate;

use crate::AppState;
use crate::modules::auth::model::AuthUser;
use crate::modules::company::{
    interface::{CompanyError, Result},
    model::{Company, CompanyPatch},
    schema::{CompanyCreateRequest, CompanyPatchRequest},
};
use crate::services::request::{json_body, RequestId};
use crate::services::response::{ApiFailure, ApiResult, ApiSuccess, MessageCode};

const OPERATION_TIMEOUT: Duration = Duration::from_secs(2);

/// Bounds a service call. Expiry is reported like any other failure.
async fn with_timeout<T>(operation: impl Future<Output = Result<T>>) -> Result<T> {
    tokio::time::timeout(OPERATION_TIMEOUT, operation)
        .await
        .unwrap_or(Err(CompanyError::Timeout(OPERATION_TIMEOUT)))
}

fn parse_company_id(request_id: &RequestId, component: &str, raw: &str) -> std::result::Result<Uuid, ApiFailure> {
    Uuid::parse_str(raw).map_err(|e| {
        tracing::error!(%request_id, component, id = %raw, error = %e, "invalid company id");
        ApiFailure::bad_request(MessageCode::InvalidCompanyId)
    })
}

// =============================================================================
// GET /v1/company/{id}
// =============================================================================

pub async fn get_company(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    Path(id): Path<String>,
) -> ApiResult<Company> {
    let component = "GetCompanyByID";
    let id = parse_company_id(&request_id, component, &id)?;

    match with_timeout(state.companies.get_company(id)).await {
        Ok(Some(company)) => {
            tracing::info!(%request_id, component, %id, "got company");
            Ok(ApiSuccess::ok(company))
        }
        Ok(None) => {
            tracing::info!(%request_id, component, %id, "company not found");
            Err(ApiFailure::not_found(MessageCode::CompanyNotFound))
        }
        Err(e) => {
            tracing::error!(%request_id, component, %id, error = %e, "failed to get company");
            Err(ApiFailure::internal(MessageCode::CompanyGetError))
        }
    }
}

// =============================================================================
// POST /v1/company
// =============================================================================

pub async fn create_company(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    Extension(user): Extension<AuthUser>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> ApiResult<()> {
    let component = "CreateCompany";

    let payload: CompanyCreateRequest = json_body(body).map_err(|e| {
        tracing::error!(%request_id, component, actor = %user.username, error = %e, "failed to decode payload");
        ApiFailure::bad_request(MessageCode::InvalidCompanyPayload)
    })?;

    if let Err(e) = payload.validate() {
        tracing::error!(%request_id, component, actor = %user.username, ?payload, error = %e, "invalid company payload");
        return Err(ApiFailure::bad_request(MessageCode::InvalidCompanyPayload));
    }

    let company = payload.into_company().map_err(|e| {
        tracing::error!(%request_id, component, actor = %user.username, error = %e, "invalid company id");
        ApiFailure::bad_request(MessageCode::InvalidCompanyPayload)
    })?;

    match with_timeout(state.companies.create_company(&company)).await {
        Ok(id) => {
            tracing::info!(%request_id, component, actor = %user.username, %id, payload = ?company, "added company");
            Ok(ApiSuccess::no_content())
        }
        Err(CompanyError::DuplicateKey) => {
            tracing::error!(%request_id, component, actor = %user.username, id = %company.id, "company already exists");
            Err(ApiFailure::bad_request(MessageCode::CompanyAlreadyExists))
        }
        Err(e) => {
            tracing::error!(%request_id, component, actor = %user.username, id = %company.id, error = %e, "failed to create company");
            Err(ApiFailure::internal(MessageCode::CompanyCreateError))
        }
    }
}

// =============================================================================
// DELETE /v1/company/{id}
// =============================================================================

pub async fn delete_company(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let component = "DeleteCompanyByID";
    let id = parse_company_id(&request_id, component, &id)?;

    if let Err(e) = with_timeout(state.companies.delete_company(id)).await {
        tracing::error!(%request_id, component, actor = %user.username, %id, error = %e, "failed to delete company");
        return Err(ApiFailure::internal(MessageCode::CompanyDeleteError));
    }

    tracing::info!(%request_id, component, actor = %user.username, %id, "deleted company");
    Ok(ApiSuccess::no_content())
}

// =============================================================================
// PATCH /v1/company/{id}
// =============================================================================

pub async fn patch_company(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> ApiResult<()> {
    let component = "PatchCompanyByID";
    let id = parse_company_id(&request_id, component, &id)?;

    let payload: CompanyPatchRequest = json_body(body).map_err(|e| {
        tracing::error!(%request_id, component, actor = %user.username, %id, error = %e, "failed to decode payload");
        ApiFailure::bad_request(MessageCode::InvalidCompanyPayload)
    })?;

    if let Err(e) = payload.validate() {
        tracing::error!(%request_id, component, actor = %user.username, %id, ?payload, error = %e, "invalid company payload");
        return Err(ApiFailure::bad_request(MessageCode::InvalidCompanyPayload));
    }

    let patch = CompanyPatch::from(payload);

    if patch.is_empty() {
        tracing::info!(%request_id, component, actor = %user.username, %id, "empty patch, nothing to do");
        return Ok(ApiSuccess::no_content());
    }

    if let Err(e) = with_timeout(state.companies.patch_company(id, &patch)).await {
        tracing::error!(%request_id, component, actor = %user.username, %id, ?patch, error = %e, "failed to patch company");
        return Err(ApiFailure::internal(MessageCode::CompanyPatchError));
    }

    tracing::info!(%request_id, component, actor = %user.username, %id, ?patch, "patched company");
    Ok(ApiSuccess::no_content())
}
