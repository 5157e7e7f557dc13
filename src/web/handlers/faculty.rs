use crate::models::{CreateFaculty, FacultyMember, UpdateFaculty};
use crate::services::faculty;
use crate::web::error::ApiResult;
use crate::web::extractors::ApiTokenAuth;
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<FacultyMember>>> {
    Ok(Json(faculty::list_faculty(&state.db)?))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<FacultyMember>> {
    Ok(Json(faculty::get_faculty(&state.db, id)?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Json(input): Json<CreateFaculty>,
) -> ApiResult<(StatusCode, Json<FacultyMember>)> {
    let member = faculty::create_faculty(&state.db, input)?;
    Ok((StatusCode::CREATED, Json(member)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Path(id): Path<i64>,
    Json(input): Json<UpdateFaculty>,
) -> ApiResult<Json<FacultyMember>> {
    Ok(Json(faculty::update_faculty(&state.db, id, input)?))
}

pub async fn destroy(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Path(id): Path<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    faculty::delete_faculty(&state.db, id)?;
    Ok(Json(serde_json::json!({ "message": "Faculty member deleted successfully" })))
}
