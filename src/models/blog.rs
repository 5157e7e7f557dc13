use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image: Option<String>,
    pub category: String,
    /// Derived from the plain-text word count of `content`; never set by callers.
    pub read_time: String,
    pub published_at: Option<String>,
    pub author_name: String,
    pub author_image: Option<String>,
    pub author_role: Option<String>,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateBlog {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub published_at: Option<String>,
    pub author_name: Option<String>,
    pub author_image: Option<String>,
    pub author_role: Option<String>,
    /// Accepted loosely; non-array input coerces to an empty list.
    pub tags: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateBlog {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub published_at: Option<String>,
    pub author_name: Option<String>,
    pub author_image: Option<String>,
    pub author_role: Option<String>,
    pub tags: Option<serde_json::Value>,
}
