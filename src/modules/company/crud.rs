use async_trait::async_trait;
use uuid::Uuid;

use super::interface::{CompanyError, CompanyRepository, Result};
use super::model::{Company, CompanyPatch};
use crate::config::DatabaseClient;
use crate::services::update::UpdateStatement;

/// SQLSTATE for `unique_violation`.
const PG_UNIQUE_VIOLATION: &str = "23505";

const TABLE_COMPANIES: &str = "companies";

const COLUMN_ID: &str = "id";
const COLUMN_NAME: &str = "name";
const COLUMN_DESCRIPTION: &str = "description";
const COLUMN_EMPLOYEES: &str = "employees_amount";
const COLUMN_REGISTERED: &str = "registered";
const COLUMN_TYPE: &str = "type";

const FIND_COMPANY_BY_ID: &str = r#"
    SELECT id, name, description, employees_amount, registered, type
    FROM companies
    WHERE id = $1
"#;

const INSERT_COMPANY: &str = r#"
    INSERT INTO companies (id, name, description, employees_amount, registered, type)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING id
"#;

const DELETE_COMPANY_BY_ID: &str = "DELETE FROM companies WHERE id = $1";

pub struct CompanyCrud {
    db: DatabaseClient,
}

impl CompanyCrud {
    pub fn new(db: DatabaseClient) -> Self {
        Self { db }
    }
}

/// Unique violations become [`CompanyError::DuplicateKey`]; everything else
/// is passed through untouched.
fn classify(err: sqlx::Error) -> CompanyError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) {
            return CompanyError::DuplicateKey;
        }
    }

    CompanyError::Database(err)
}

pub fn patch_statement(patch: &CompanyPatch) -> UpdateStatement {
    UpdateStatement::new(TABLE_COMPANIES)
        .set_opt(COLUMN_DESCRIPTION, patch.description.clone())
        .set_opt(COLUMN_NAME, patch.name.clone())
        .set_opt(COLUMN_EMPLOYEES, patch.employees)
        .set_opt(COLUMN_REGISTERED, patch.registered)
        .set_opt(COLUMN_TYPE, patch.company_type.map(|t| t.as_str()))
}

#[async_trait]
impl CompanyRepository for CompanyCrud {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(FIND_COMPANY_BY_ID)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(company)
    }

    async fn create(&self, company: &Company) -> Result<Uuid> {
        sqlx::query_scalar::<_, Uuid>(INSERT_COMPANY)
            .bind(company.id)
            .bind(&company.name)
            .bind(&company.description)
            .bind(company.employees)
            .bind(company.registered)
            .bind(company.company_type.as_str())
            .fetch_one(self.db.pool())
            .await
            .map_err(classify)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        sqlx::query(DELETE_COMPANY_BY_ID)
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(())
    }

    async fn patch_by_id(&self, id: Uuid, patch: &CompanyPatch) -> Result<()> {
        let Some(mut query) = patch_statement(patch).build(COLUMN_ID, id) else {
            return Ok(());
        };

        query.build().execute(self.db.pool()).await?;

        Ok(())
    }
}
