use crate::models::ApiToken;
use crate::services::api_token;
use crate::web::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub struct ApiTokenAuth(pub ApiToken);

fn unauthenticated() -> Response {
    let body = serde_json::json!({ "message": "Unauthenticated" });
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

impl FromRequestParts<Arc<AppState>> for ApiTokenAuth {
    type Rejection = Response;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        state: &'life1 Arc<AppState>,
    ) -> Pin<Box<dyn Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>>
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        let state = state.clone();
        let header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        Box::pin(async move {
            let header = header.ok_or_else(unauthenticated)?;
            let raw = header
                .strip_prefix("Bearer ")
                .ok_or_else(unauthenticated)?
                .trim();

            let token = api_token::validate_token(&state.db, raw)
                .map_err(|e| {
                    tracing::error!("Token validation failed: {:?}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(serde_json::json!({ "message": "Internal server error" })),
                    )
                        .into_response()
                })?
                .ok_or_else(unauthenticated)?;

            Ok(ApiTokenAuth(token))
        })
    }
}
