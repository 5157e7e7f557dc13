use crate::models::{CreateWorkshop, UpdateWorkshop, Workshop};
use crate::services::workshops;
use crate::web::error::ApiResult;
use crate::web::extractors::ApiTokenAuth;
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Workshop>>> {
    Ok(Json(workshops::list_workshops(&state.db)?))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> ApiResult<Json<Workshop>> {
    Ok(Json(workshops::get_workshop(&state.db, &key)?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Json(input): Json<CreateWorkshop>,
) -> ApiResult<(StatusCode, Json<Workshop>)> {
    let workshop = workshops::create_workshop(&state.db, input)?;
    Ok((StatusCode::CREATED, Json(workshop)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Path(key): Path<String>,
    Json(input): Json<UpdateWorkshop>,
) -> ApiResult<Json<Workshop>> {
    Ok(Json(workshops::update_workshop(&state.db, &key, input)?))
}

pub async fn destroy(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Path(key): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    workshops::delete_workshop(&state.db, &key)?;
    Ok(Json(serde_json::json!({ "message": "Workshop deleted successfully" })))
}
