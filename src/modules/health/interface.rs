use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, HealthError>;

#[async_trait]
pub trait HealthRepository: Send + Sync {
    async fn ping(&self) -> Result<()>;
}

#[async_trait]
pub trait HealthService: Send + Sync {
    async fn check(&self) -> Result<()>;
}

#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("Database unreachable: {0}")]
    Database(#[from] sqlx::Error),
}
