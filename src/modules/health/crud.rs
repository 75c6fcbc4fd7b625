use async_trait::async_trait;

use super::interface::{HealthRepository, Result};
use crate::config::DatabaseClient;

pub struct HealthCrud {
    db: DatabaseClient,
}

impl HealthCrud {
    pub fn new(db: DatabaseClient) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthRepository for HealthCrud {
    async fn ping(&self) -> Result<()> {
        self.db.ping().await?;
        Ok(())
    }
}
