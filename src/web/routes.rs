use super::handlers;
use super::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::Router;
use std::sync::Arc;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/blogs", get(handlers::blogs::list))
        .route("/api/blogs", post(handlers::blogs::create))
        .route("/api/blogs/:key", get(handlers::blogs::show))
        .route("/api/blogs/:key", put(handlers::blogs::update))
        .route("/api/blogs/:key", delete(handlers::blogs::destroy))
        .route("/api/courses", get(handlers::courses::list))
        .route("/api/courses", post(handlers::courses::create))
        .route("/api/courses/:key", get(handlers::courses::show))
        .route("/api/courses/:key", put(handlers::courses::update))
        .route("/api/courses/:key", delete(handlers::courses::destroy))
        .route("/api/workshops", get(handlers::workshops::list))
        .route("/api/workshops", post(handlers::workshops::create))
        .route("/api/workshops/:key", get(handlers::workshops::show))
        .route("/api/workshops/:key", put(handlers::workshops::update))
        .route("/api/workshops/:key", delete(handlers::workshops::destroy))
        .route("/api/faculty", get(handlers::faculty::list))
        .route("/api/faculty", post(handlers::faculty::create))
        .route("/api/faculty/:id", get(handlers::faculty::show))
        .route("/api/faculty/:id", put(handlers::faculty::update))
        .route("/api/faculty/:id", delete(handlers::faculty::destroy))
        .route("/api/testimonials", get(handlers::testimonials::list))
        .route("/api/testimonials", post(handlers::testimonials::create))
        .route("/api/testimonials/:id", get(handlers::testimonials::show))
        .route("/api/testimonials/:id", put(handlers::testimonials::update))
        .route(
            "/api/testimonials/:id",
            delete(handlers::testimonials::destroy),
        )
        .route("/api/certificates", get(handlers::certificates::list))
        .route("/api/certificates", post(handlers::certificates::create))
        .route("/api/certificates/:id", get(handlers::certificates::show))
        .route("/api/certificates/:id", put(handlers::certificates::update))
        .route(
            "/api/certificates/:id",
            delete(handlers::certificates::destroy),
        )
        .route("/api/gallery", get(handlers::gallery::list))
        .route("/api/gallery", post(handlers::gallery::create))
        .route("/api/gallery/:id", get(handlers::gallery::show))
        .route("/api/gallery/:id", put(handlers::gallery::update))
        .route("/api/gallery/:id", delete(handlers::gallery::destroy))
        .route("/api/dashboard/stats", get(handlers::dashboard::stats))
}

pub fn media_routes(max_upload_bytes: usize) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/upload-image",
            post(handlers::media::upload_image)
                .layer(DefaultBodyLimit::max(max_upload_bytes + 64 * 1024)),
        )
        .route("/api/delete-image", post(handlers::media::delete_image))
        .route("/storage/images/:filename", get(handlers::media::serve_image))
}
