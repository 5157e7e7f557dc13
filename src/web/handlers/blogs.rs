use crate::models::{Blog, CreateBlog, UpdateBlog};
use crate::services::blogs;
use crate::web::error::ApiResult;
use crate::web::extractors::ApiTokenAuth;
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Blog>>> {
    Ok(Json(blogs::list_blogs(&state.db)?))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> ApiResult<Json<Blog>> {
    Ok(Json(blogs::get_blog(&state.db, &key)?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Json(input): Json<CreateBlog>,
) -> ApiResult<(StatusCode, Json<Blog>)> {
    let blog = blogs::create_blog(&state.db, input)?;
    Ok((StatusCode::CREATED, Json(blog)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Path(key): Path<String>,
    Json(input): Json<UpdateBlog>,
) -> ApiResult<Json<Blog>> {
    Ok(Json(blogs::update_blog(&state.db, &key, input)?))
}

pub async fn destroy(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Path(key): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    blogs::delete_blog(&state.db, &key)?;
    Ok(Json(serde_json::json!({ "message": "Blog deleted successfully" })))
}
