use crate::services::dashboard::{self, DashboardStats};
use crate::web::error::ApiResult;
use crate::web::extractors::ApiTokenAuth;
use crate::web::state::AppState;
use axum::extract::State;
use axum::response::Json;
use std::sync::Arc;

pub async fn stats(
    State(state): State<Arc<AppState>>,
    _auth: ApiTokenAuth,
) -> ApiResult<Json<DashboardStats>> {
    Ok(Json(dashboard::stats(&state.db)?))
}
