use axum::extract::State;
use std::sync::Arc;

use crate::AppState;
use crate::services::request::RequestId;
use crate::services::response::{ApiFailure, ApiResult, ApiSuccess, MessageCode};

// =============================================================================
// GET /v1/health - Database liveness
// =============================================================================

pub async fn health_check(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
) -> ApiResult<()> {
    let component = "HealthCheck";

    if let Err(e) = state.health.check().await {
        tracing::error!(%request_id, component, error = %e, "an error occurred during healthcheck");
        return Err(ApiFailure::internal(MessageCode::GenericHealthError));
    }

    Ok(ApiSuccess::no_content())
}
