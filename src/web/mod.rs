mod error;
mod extractors;
mod handlers;
mod routes;
mod state;

pub use error::enable_diagnostics;
pub use state::AppState;

use crate::{Config, Database};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub async fn serve(config: Config, db: Database, addr: &str, production_mode: bool) -> Result<()> {
    if !production_mode {
        enable_diagnostics();
    }

    let max_upload_bytes = config.media.max_upload_bytes;
    let state = Arc::new(AppState::new(config, db, production_mode));

    let app = Router::new()
        .merge(routes::api_routes())
        .merge(routes::media_routes(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
