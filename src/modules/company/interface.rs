use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

use super::model::{Company, CompanyPatch};

// =============================================================================
// REPOSITORY TRAITS
// =============================================================================

pub type Result<T> = std::result::Result<T, CompanyError>;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// `Ok(None)` when no record has the id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>>;
    async fn create(&self, company: &Company) -> Result<Uuid>;
    /// Deleting an unknown id is not an error.
    async fn delete_by_id(&self, id: Uuid) -> Result<()>;
    async fn patch_by_id(&self, id: Uuid, patch: &CompanyPatch) -> Result<()>;
}

// =============================================================================
// SERVICE TRAITS
// =============================================================================

#[async_trait]
pub trait CompanyService: Send + Sync {
    async fn get_company(&self, id: Uuid) -> Result<Option<Company>>;
    async fn create_company(&self, company: &Company) -> Result<Uuid>;
    async fn delete_company(&self, id: Uuid) -> Result<()>;
    async fn patch_company(&self, id: Uuid, patch: &CompanyPatch) -> Result<()>;
}

// =============================================================================
// ERROR TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CompanyError {
    #[error("Company already exists")]
    DuplicateKey,

    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
