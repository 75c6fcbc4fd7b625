use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::interface::{CompanyRepository, CompanyService, Result};
use super::model::{Company, CompanyPatch};

/// Delegates straight to the repository. Business rules go here.
pub struct CompanyManager {
    repository: Arc<dyn CompanyRepository>,
}

impl CompanyManager {
    pub fn new(repository: Arc<dyn CompanyRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CompanyService for CompanyManager {
    async fn get_company(&self, id: Uuid) -> Result<Option<Company>> {
        self.repository.find_by_id(id).await
    }

    async fn create_company(&self, company: &Company) -> Result<Uuid> {
        self.repository.create(company).await
    }

    async fn delete_company(&self, id: Uuid) -> Result<()> {
        self.repository.delete_by_id(id).await
    }

    async fn patch_company(&self, id: Uuid, patch: &CompanyPatch) -> Result<()> {
        self.repository.patch_by_id(id, patch).await
    }
}
