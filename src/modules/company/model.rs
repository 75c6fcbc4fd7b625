use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyType {
    #[serde(alias = "Corporations")]
    Corporation,
    NonProfit,
    Cooperative,
    #[serde(rename = "Sole Proprietorship")]
    SoleProprietorship,
}

impl CompanyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Corporation => "Corporation",
            Self::NonProfit => "NonProfit",
            Self::Cooperative => "Cooperative",
            Self::SoleProprietorship => "Sole Proprietorship",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown company type: {0}")]
pub struct UnknownCompanyType(pub String);

impl TryFrom<String> for CompanyType {
    type Error = UnknownCompanyType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Corporation" => Ok(Self::Corporation),
            "NonProfit" => Ok(Self::NonProfit),
            "Cooperative" => Ok(Self::Cooperative),
            "Sole Proprietorship" => Ok(Self::SoleProprietorship),
            _ => Err(UnknownCompanyType(value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type", try_from = "String")]
    pub company_type: CompanyType,
    #[sqlx(rename = "employees_amount")]
    pub employees: i32,
    pub registered: bool,
}

/// Sparse update: `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub company_type: Option<CompanyType>,
    pub employees: Option<i32>,
    pub registered: Option<bool>,
}

impl CompanyPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.company_type.is_none()
            && self.employees.is_none()
            && self.registered.is_none()
    }

    pub fn apply(&self, company: &mut Company) {
        if let Some(name) = &self.name {
            company.name = name.clone();
        }
        if let Some(description) = &self.description {
            company.description = Some(description.clone());
        }
        if let Some(company_type) = self.company_type {
            company.company_type = company_type;
        }
        if let Some(employees) = self.employees {
            company.employees = employees;
        }
        if let Some(registered) = self.registered {
            company.registered = registered;
        }
    }
}
