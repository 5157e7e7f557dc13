pub mod blogs;
pub mod certificates;
pub mod courses;
pub mod dashboard;
pub mod faculty;
pub mod gallery;
pub mod media;
pub mod testimonials;
pub mod workshops;

use axum::response::Json;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
