use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image: Option<String>,
    pub category: String,
    pub duration: Option<String>,
    pub curriculum: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub duration: Option<String>,
    pub curriculum: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub duration: Option<String>,
    pub curriculum: Option<serde_json::Value>,
}
