use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;
use crate::modules::auth::middleware::require_bearer;
use super::controller;

/// Reads are public; writes go through the bearer middleware.
pub fn company_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let auth = middleware::from_fn_with_state(state, require_bearer);

    Router::new()
        .route(
            "/company",
            post(controller::create_company).route_layer(auth.clone()),
        )
        .route(
            "/company/{id}",
            get(controller::get_company).merge(
                delete(controller::delete_company)
                    .patch(controller::patch_company)
                    .route_layer(auth),
            ),
        )
}
