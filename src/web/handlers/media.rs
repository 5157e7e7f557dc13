use crate::services::media;
use crate::web::error::{ApiError, ApiResult};
use crate::web::extractors::ApiTokenAuth;
use crate::web::state::AppState;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use std::sync::Arc;

pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    mut multipart: Multipart,
) -> ApiResult<Response> {
    let max_bytes = state.config.media.max_upload_bytes;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Internal(e.into()))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::Internal(e.into()))?;

        let stored = media::store_image(
            &state.upload_dir,
            &state.config.site.url,
            &data,
            max_bytes,
        )?;

        let body = serde_json::json!({
            "success": true,
            "url": stored.url,
            "path": stored.path,
        });
        return Ok((StatusCode::CREATED, Json(body)).into_response());
    }

    Err(crate::services::error::ServiceError::validation(
        "image",
        "The image field is required.",
    )
    .into())
}

#[derive(Deserialize)]
pub struct DeleteImageRequest {
    pub path: Option<String>,
}

pub async fn delete_image(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Json(input): Json<DeleteImageRequest>,
) -> ApiResult<Response> {
    let path = input.path.unwrap_or_default();
    let deleted = media::delete_image(&state.upload_dir, &path)?;

    if !deleted {
        let body = serde_json::json!({
            "success": false,
            "message": "Image not found",
        });
        return Ok((StatusCode::NOT_FOUND, Json(body)).into_response());
    }

    let body = serde_json::json!({
        "success": true,
        "message": "Image deleted successfully",
    });
    Ok(Json(body).into_response())
}

pub async fn serve_image(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> ApiResult<Response> {
    // Prevent path traversal attacks
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    let file_path = state.upload_dir.join("images").join(&filename);
    let content = match tokio::fs::read(&file_path).await {
        Ok(c) => c,
        Err(_) => return Ok(StatusCode::NOT_FOUND.into_response()),
    };

    let mime = mime_guess::from_path(&filename).first_or_octet_stream();
    Ok(([(header::CONTENT_TYPE, mime.as_ref())], content).into_response())
}
