use crate::services::error::ServiceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::sync::atomic::{AtomicBool, Ordering};

/// When enabled, 500 responses carry the underlying error message. Off in
/// production so internals never leak to clients.
static DIAGNOSTICS: AtomicBool = AtomicBool::new(false);

pub fn enable_diagnostics() {
    DIAGNOSTICS.store(true, Ordering::Relaxed);
}

pub enum ApiError {
    Service(ServiceError),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Service(ServiceError::Validation(errors)) => {
                let body = serde_json::json!({
                    "message": "Validation failed",
                    "errors": errors,
                });
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::Service(ServiceError::InvalidTitle) => {
                let body = serde_json::json!({
                    "message": "Validation failed",
                    "errors": {
                        "title": ServiceError::InvalidTitle.to_string(),
                    },
                });
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::Service(ServiceError::NotFound(what)) => {
                let body = serde_json::json!({
                    "message": format!("{} not found", what),
                });
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ApiError::Service(ServiceError::Database(err)) => internal(err.into()),
            ApiError::Service(ServiceError::Other(err)) => internal(err),
            ApiError::Internal(err) => internal(err),
        }
    }
}

fn internal(err: anyhow::Error) -> Response {
    tracing::error!("Request failed: {:?}", err);
    let message = if DIAGNOSTICS.load(Ordering::Relaxed) {
        format!("Internal server error: {}", err)
    } else {
        "Internal server error".to_string()
    };
    let body = serde_json::json!({ "message": message });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::Service(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
