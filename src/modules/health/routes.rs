use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;
use super::controller;

pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(controller::health_check))
}
