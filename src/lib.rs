pub mod config;
pub mod modules;
pub mod services;

use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use config::{environment::AppConfig, Config, DatabaseClient};
use modules::auth::{auth_routes, credentials::CredentialStore, service::AuthService};
use modules::company::{company_routes, crud::CompanyCrud, interface::CompanyService, service::CompanyManager};
use modules::health::{crud::HealthCrud, health_routes, interface::HealthService, service::HealthMonitor};
use services::jwt::JwtService;
use services::response;
use services::telemetry::RequestSpan;

const MAX_BODY_BYTES: usize = 1024 * 100;

pub struct AppState {
    pub app: AppConfig,
    pub companies: Arc<dyn CompanyService>,
    pub health: Arc<dyn HealthService>,
    pub auth: AuthService,
}

impl AppState {
    /// Wires the Postgres-backed repositories behind their services.
    pub fn new(config: &Config, db: DatabaseClient) -> Self {
        let jwt_service = JwtService::new(config.http.jwt_secret.clone(), config.auth.token_ttl_hours);
        let credentials = CredentialStore::new(config.auth.users.clone());

        Self {
            app: config.app.clone(),
            companies: Arc::new(CompanyManager::new(Arc::new(CompanyCrud::new(db.clone())))),
            health: Arc::new(HealthMonitor::new(Arc::new(HealthCrud::new(db)))),
            auth: AuthService::new(credentials, jwt_service),
        }
    }
}

/// Builds the `/v1` router. Every handler and fallback answers with the JSON
/// envelope; the one exception is a body whose declared length exceeds the
/// limit, which the body-limit layer rejects with a bare 413.
pub fn create_app(state: AppState) -> Router {
    let span = RequestSpan::new(&state.app);
    let state = Arc::new(state);

    let v1 = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(company_routes(state.clone()));

    Router::new()
        .nest("/v1", v1)
        .fallback(response::not_found)
        .method_not_allowed_fallback(response::method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(span))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
        )
        .with_state(state)
}
