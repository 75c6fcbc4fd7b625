use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::model::{Company, CompanyPatch, CompanyType};

fn validate_uuid(value: &str) -> Result<(), ValidationError> {
    Uuid::parse_str(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("uuid"))
}

fn validate_employees(value: i32) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::new("non_zero").with_message("employees must be non-zero".into()));
    }
    Ok(())
}

// =============================================================================
// CREATE
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompanyCreateRequest {
    #[validate(custom(function = "validate_uuid"))]
    pub id: Option<String>,

    #[validate(length(min = 1, max = 15, message = "name must be 1-15 characters"))]
    pub name: String,

    #[validate(length(max = 3000, message = "description must be at most 3000 characters"))]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub company_type: CompanyType,

    #[validate(
        required(message = "employees is required"),
        custom(function = "validate_employees")
    )]
    pub employees: Option<i32>,

    #[serde(default)]
    pub registered: bool,
}

impl CompanyCreateRequest {
    /// Builds the record to insert, assigning a fresh id when none was sent.
    pub fn into_company(self) -> Result<Company, uuid::Error> {
        let id = match self.id.as_deref() {
            Some(id) => Uuid::parse_str(id)?,
            None => Uuid::new_v4(),
        };

        Ok(Company {
            id,
            name: self.name,
            description: self.description,
            company_type: self.company_type,
            employees: self.employees.unwrap_or_default(),
            registered: self.registered,
        })
    }
}

// =============================================================================
// PATCH
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CompanyPatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 3000, message = "description must be at most 3000 characters"))]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 15, message = "name must be 1-15 characters"))]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub company_type: Option<CompanyType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered: Option<bool>,
}

impl From<CompanyPatchRequest> for CompanyPatch {
    fn from(req: CompanyPatchRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            company_type: req.company_type,
            employees: req.employees,
            registered: req.registered,
        }
    }
}
