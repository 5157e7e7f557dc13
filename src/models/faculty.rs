use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct FacultyMember {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub bio: Option<String>,
    pub experience: Option<String>,
    pub image: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub qualifications: Vec<String>,
    pub expertise_areas: Vec<String>,
    pub order: i64,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateFaculty {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub bio: Option<String>,
    pub experience: Option<String>,
    pub image: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub qualifications: Option<serde_json::Value>,
    pub expertise_areas: Option<serde_json::Value>,
    pub order: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateFaculty {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub bio: Option<String>,
    pub experience: Option<String>,
    pub image: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub qualifications: Option<serde_json::Value>,
    pub expertise_areas: Option<serde_json::Value>,
    pub order: Option<i64>,
    pub is_active: Option<bool>,
}
