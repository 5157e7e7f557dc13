use crate::models::{Course, CreateCourse, UpdateCourse};
use crate::services::courses;
use crate::web::error::ApiResult;
use crate::web::extractors::ApiTokenAuth;
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Course>>> {
    Ok(Json(courses::list_courses(&state.db)?))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> ApiResult<Json<Course>> {
    Ok(Json(courses::get_course(&state.db, &key)?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Json(input): Json<CreateCourse>,
) -> ApiResult<(StatusCode, Json<Course>)> {
    let course = courses::create_course(&state.db, input)?;
    Ok((StatusCode::CREATED, Json(course)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Path(key): Path<String>,
    Json(input): Json<UpdateCourse>,
) -> ApiResult<Json<Course>> {
    Ok(Json(courses::update_course(&state.db, &key, input)?))
}

pub async fn destroy(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Path(key): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    courses::delete_course(&state.db, &key)?;
    Ok(Json(serde_json::json!({ "message": "Course deleted successfully" })))
}
