use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Certificate {
    pub id: i64,
    pub title: String,
    pub issuer: String,
    pub year: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub certificate_number: Option<String>,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub order: i64,
    pub is_featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateCertificate {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub year: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub certificate_number: Option<String>,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub order: Option<i64>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCertificate {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub year: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub certificate_number: Option<String>,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub order: Option<i64>,
    pub is_featured: Option<bool>,
}
