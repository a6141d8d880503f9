pub mod webhook_handler;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::routes::webhook_handler::webhook_handler;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/github-webhook", post(webhook_handler))
        .route("/", get(|| async { "merge-diff-relay is running" }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
