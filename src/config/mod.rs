pub mod database;
pub mod environment;
pub mod profile;

pub use database::{DatabaseClient, DatabaseConfig, DatabaseError, DbPool, PoolSettings};
pub use environment::{Config, ConfigError};
