use axum::http::Request;
use tower_http::trace::MakeSpan;
use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::request::REQUEST_ID_HEADER;
use crate::config::environment::AppConfig;

/// Installs the global subscriber. `RUST_LOG` overrides the default filter;
/// production logs are emitted as JSON lines.
pub fn init_tracing(app: &AppConfig) {
    let level = if app.is_production() { "info" } else { "debug" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("company_service={level},tower_http={level}")));

    let registry = tracing_subscriber::registry().with(filter);

    if app.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Root span for every request, carrying the service identity so that all
/// events logged while handling it share the same default fields.
#[derive(Debug, Clone)]
pub struct RequestSpan {
    application_name: &'static str,
    version: String,
}

impl RequestSpan {
    pub fn new(app: &AppConfig) -> Self {
        Self {
            application_name: app.name,
            version: app.version.clone(),
        }
    }
}

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        tracing::info_span!(
            "request",
            application_name = self.application_name,
            version = %self.version,
            method = %request.method(),
            uri = %request.uri(),
            request_id,
        )
    }
}
