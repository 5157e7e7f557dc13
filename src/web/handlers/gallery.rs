use crate::models::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use crate::services::gallery;
use crate::web::error::ApiResult;
use crate::web::extractors::ApiTokenAuth;
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<GalleryItem>>> {
    Ok(Json(gallery::list_gallery(&state.db)?))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<GalleryItem>> {
    Ok(Json(gallery::get_gallery_item(&state.db, id)?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Json(input): Json<CreateGalleryItem>,
) -> ApiResult<(StatusCode, Json<GalleryItem>)> {
    let item = gallery::create_gallery_item(&state.db, input)?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Path(id): Path<i64>,
    Json(input): Json<UpdateGalleryItem>,
) -> ApiResult<Json<GalleryItem>> {
    Ok(Json(gallery::update_gallery_item(&state.db, id, input)?))
}

pub async fn destroy(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Path(id): Path<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    gallery::delete_gallery_item(&state.db, id)?;
    Ok(Json(serde_json::json!({ "message": "Gallery item deleted successfully" })))
}
