//! Company records exposed by the `/User` endpoints.

use serde::{Deserialize, Serialize};

use crate::reminder::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub name: String,
    #[serde(default)]
    pub member_count: u32,
}

/// Response of `GetCompanyInformation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub departments: Vec<Department>,
}

/// Body of `ChangeCompanyId`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeCompanyRequest {
    pub user_id: String,
    pub company_id: String,
    pub password: String,
}
