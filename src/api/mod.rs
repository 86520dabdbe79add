// src/api/mod.rs

pub mod handler;

pub use handler::{
    health_handler, render_view_handler, submit_workflow_handler, workflow_state_handler,
};

use crate::models::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/workflows/{workflow}",
            get(workflow_state_handler).post(submit_workflow_handler),
        )
        .route("/api/views/{workflow}", post(render_view_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
