use crate::models::{Certificate, CreateCertificate, UpdateCertificate};
use crate::services::certificates;
use crate::web::error::ApiResult;
use crate::web::extractors::ApiTokenAuth;
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Certificate>>> {
    Ok(Json(certificates::list_certificates(&state.db)?))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Certificate>> {
    Ok(Json(certificates::get_certificate(&state.db, id)?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Json(input): Json<CreateCertificate>,
) -> ApiResult<(StatusCode, Json<Certificate>)> {
    let certificate = certificates::create_certificate(&state.db, input)?;
    Ok((StatusCode::CREATED, Json(certificate)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Path(id): Path<i64>,
    Json(input): Json<UpdateCertificate>,
) -> ApiResult<Json<Certificate>> {
    Ok(Json(certificates::update_certificate(&state.db, id, input)?))
}

pub async fn destroy(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
    Path(id): Path<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    certificates::delete_certificate(&state.db, id)?;
    Ok(Json(serde_json::json!({ "message": "Certificate deleted successfully" })))
}
