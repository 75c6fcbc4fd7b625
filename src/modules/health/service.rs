use async_trait::async_trait;
use std::sync::Arc;

use super::interface::{HealthRepository, HealthService, Result};

pub struct HealthMonitor {
    repository: Arc<dyn HealthRepository>,
}

impl HealthMonitor {
    pub fn new(repository: Arc<dyn HealthRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl HealthService for HealthMonitor {
    async fn check(&self) -> Result<()> {
        self.repository.ping().await
    }
}
