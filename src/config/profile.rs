use serde::Deserialize;
use std::collections::BTreeMap;

use super::database::PoolSettings;
use super::environment::ConfigError;

const DEVELOPMENT: &str = include_str!("profiles/development.json");
const TEST: &str = include_str!("profiles/test.json");
const PRODUCTION: &str = include_str!("profiles/production.json");

/// Settings profile selected by `APP_ENV`
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub database: PoolSettings,
    #[serde(default)]
    pub auth: AuthSettings,
}

/// Static login table and token lifetime
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub users: BTreeMap<String, String>,
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            token_ttl_hours: default_token_ttl_hours(),
        }
    }
}

fn default_token_ttl_hours() -> i64 {
    24
}

impl Profile {
    pub fn load(environment: &str) -> Result<Self, ConfigError> {
        let raw = match environment {
            "development" => DEVELOPMENT,
            "test" => TEST,
            "production" => PRODUCTION,
            other => return Err(ConfigError::UnknownProfile(other.to_string())),
        };

        Self::parse(environment, raw)
    }

    pub fn parse(name: &str, raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|source| ConfigError::InvalidProfile {
            name: name.to_string(),
            source,
        })
    }
}
