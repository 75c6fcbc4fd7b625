use std::collections::HashMap;
use std::env;

use super::database::DatabaseConfig;
use super::profile::{AuthSettings, Profile};

pub const APP_NAME: &str = "company-service";

const PRODUCTION: &str = "production";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is not a valid port: {value:?}")]
    InvalidPort { name: &'static str, value: String },

    #[error("failed to find configuration profile: {0:?}")]
    UnknownProfile(String),

    #[error("invalid configuration profile {name}: {source}")]
    InvalidProfile {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub version: String,
    pub name: &'static str,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.env == PRODUCTION
    }

    /// Identifier reported to Postgres as `application_name`.
    pub fn identifier(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }
}

#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
}

impl HttpServerConfig {
    pub fn address(&self) -> String {
        let host = if self.host.is_empty() { "0.0.0.0" } else { &self.host };
        format!("{}:{}", host, self.port)
    }
}

/// Environment configuration
/// Assembled once at startup from environment variables plus the
/// settings profile named by `APP_ENV`.
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub http: HttpServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(env::vars().collect())
    }

    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| vars.get(key).cloned().unwrap_or_default();

        let app_env = get("APP_ENV");
        if app_env.is_empty() {
            return Err(ConfigError::Missing("APP_ENV"));
        }

        let version = match get("APP_VERSION") {
            v if v.is_empty() => env!("CARGO_PKG_VERSION").to_string(),
            v => v,
        };

        let app = AppConfig {
            env: app_env,
            version,
            name: APP_NAME,
        };

        let jwt_secret = get("JWT_SECRET_KEY");
        if jwt_secret.is_empty() {
            return Err(ConfigError::Missing("JWT_SECRET_KEY"));
        }

        let http = HttpServerConfig {
            host: get("APP_HOST"),
            port: parse_port("APP_PORT", &get("APP_PORT"))?,
            jwt_secret,
        };

        let profile = Profile::load(&app.env)?;

        let database = DatabaseConfig {
            username: get("DB_USER"),
            password: get("DB_PASS"),
            name: get("DB_NAME"),
            ssl: get("DB_SSL"),
            host: get("DB_HOST"),
            port: parse_port("DB_PORT", &get("DB_PORT"))?,
            app_name: app.identifier(),
            settings: profile.database,
        };

        Ok(Self {
            app,
            http,
            database,
            auth: profile.auth,
        })
    }
}

fn parse_port(name: &'static str, value: &str) -> Result<u16, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Missing(name));
    }

    value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
        name,
        value: value.to_string(),
    })
}
