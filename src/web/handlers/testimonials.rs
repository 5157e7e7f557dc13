use crate::models::{CreateTestimonial, Testimonial, UpdateTestimonial};
use crate::services::testimonials;
use crate::web::error::ApiResult;
use crate::web::extractors::ApiTokenAuth;
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Testimonial>>> {
    Ok(Json(testimonials::list_testimonials(&state.db)?))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Testimonial>> {
    Ok(Json(testimonials::get_testimonial(&state.db, id)?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Json(input): Json<CreateTestimonial>,
) -> ApiResult<(StatusCode, Json<Testimonial>)> {
    let testimonial = testimonials::create_testimonial(&state.db, input)?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTestimonial>,
) -> ApiResult<Json<Testimonial>> {
    Ok(Json(testimonials::update_testimonial(&state.db, id, input)?))
}

pub async fn destroy(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Path(id): Path<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    testimonials::delete_testimonial(&state.db, id)?;
    Ok(Json(serde_json::json!({ "message": "Testimonial deleted successfully" })))
}
