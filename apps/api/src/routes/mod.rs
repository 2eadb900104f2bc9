pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ingest::handlers::handle_extract_features;
use crate::matching::handlers::handle_nlp_module;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/extract-features",
            post(handle_extract_features).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/nlp-module", get(handle_nlp_module))
        .with_state(state)
}
