use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub course: Option<String>,
    pub testimonial: Option<String>,
    pub rating: i64,
    pub image: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub is_featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTestimonial {
    pub name: Option<String>,
    pub course: Option<String>,
    pub testimonial: Option<String>,
    pub rating: Option<i64>,
    pub image: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTestimonial {
    pub name: Option<String>,
    pub course: Option<String>,
    pub testimonial: Option<String>,
    pub rating: Option<i64>,
    pub image: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub is_featured: Option<bool>,
}
