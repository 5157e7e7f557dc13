use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct GalleryItem {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: Option<String>,
    pub order: i64,
    pub is_featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateGalleryItem {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub order: Option<i64>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateGalleryItem {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub order: Option<i64>,
    pub is_featured: Option<bool>,
}
