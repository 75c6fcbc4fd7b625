use serde::Deserialize;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
    Connection, PgPool,
};
use std::str::FromStr;
use std::time::Duration;

pub type DbPool = PgPool;

const MIN_PORT: u16 = 255;

/// Pool tuning taken from the settings profile
#[derive(Debug, Clone, Deserialize)]
pub struct PoolSettings {
    pub max_open_connections: u32,
    pub max_idle_connections: u32,
    pub connection_max_lifetime_secs: u64,
    pub connection_max_idle_time_secs: u64,
    pub connect_timeout_secs: u64,
    #[serde(default)]
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub username: String,
    pub password: String,
    pub name: String,
    pub ssl: String,
    pub host: String,
    pub port: u16,
    pub app_name: String,
    pub settings: PoolSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("{0} can't be empty")]
    EmptyField(&'static str),

    #[error("port is invalid: {0}")]
    InvalidPort(u16),

    #[error("ssl mode is invalid: {0}")]
    InvalidSslMode(String),

    #[error("connect timeout seconds can't be zero")]
    ZeroConnectTimeout,

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl DatabaseConfig {
    fn validate(&self) -> Result<PgSslMode, DatabaseError> {
        if self.host.is_empty() {
            return Err(DatabaseError::EmptyField("host"));
        }
        if self.port < MIN_PORT {
            return Err(DatabaseError::InvalidPort(self.port));
        }
        if self.username.is_empty() {
            return Err(DatabaseError::EmptyField("username"));
        }
        if self.name.is_empty() {
            return Err(DatabaseError::EmptyField("database name"));
        }
        if self.ssl.is_empty() {
            return Err(DatabaseError::EmptyField("ssl mode"));
        }
        if self.settings.connect_timeout_secs == 0 {
            return Err(DatabaseError::ZeroConnectTimeout);
        }

        PgSslMode::from_str(&self.ssl).map_err(|_| DatabaseError::InvalidSslMode(self.ssl.clone()))
    }

    /// Structured connection options for the pool.
    pub fn connect_options(&self) -> Result<PgConnectOptions, DatabaseError> {
        let ssl_mode = self.validate()?;

        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .database(&self.name)
            .ssl_mode(ssl_mode)
            .application_name(&self.app_name);

        if self.password.is_empty() {
            return Ok(options);
        }

        Ok(options.password(&self.password))
    }

    /// libpq keyword string with the password masked, for logs.
    pub fn dsn(&self) -> Result<String, DatabaseError> {
        self.validate()?;

        let mut dsn = format!(
            "host={} port={} user={} dbname={} sslmode={} application_name={} connect_timeout={}",
            self.host,
            self.port,
            self.username,
            self.name,
            self.ssl,
            self.app_name,
            self.settings.connect_timeout_secs,
        );

        if !self.password.is_empty() {
            dsn.push_str(" password=****");
        }

        Ok(dsn)
    }

    pub fn pool_options(&self) -> PgPoolOptions {
        let settings = &self.settings;
        let max_open = settings.max_open_connections.max(1);

        // sqlx has no idle ceiling, so the idle budget is kept warm as a floor
        // and only connections above it are reaped after the idle timeout.
        PgPoolOptions::new()
            .max_connections(max_open)
            .min_connections(settings.max_idle_connections.min(max_open))
            .max_lifetime(non_zero_secs(settings.connection_max_lifetime_secs))
            .idle_timeout(non_zero_secs(settings.connection_max_idle_time_secs))
            .acquire_timeout(Duration::from_secs(settings.connect_timeout_secs))
    }
}

fn non_zero_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Owns the connection pool. Repositories borrow it per call.
#[derive(Clone)]
pub struct DatabaseClient {
    pool: DbPool,
}

impl DatabaseClient {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let options = config.connect_options()?;
        let pool = config.pool_options().connect_with(options).await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await
    }

    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}
