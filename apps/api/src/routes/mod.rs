pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/analyze/upload",
            post(handlers::handle_analyze_upload),
        )
        .route(
            "/api/v1/analyze/optimized-resume",
            post(handlers::handle_download_optimized),
        )
        .route("/api/v1/keywords", post(handlers::handle_keywords))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
