pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::candidates::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/upload", post(handlers::handle_upload))
        .route("/api/upload_pdf", post(handlers::handle_upload_pdf))
        .route("/api/ranked", get(handlers::handle_ranked))
        .route("/api/export_top/:n", get(handlers::handle_export_top))
        .with_state(state)
}
