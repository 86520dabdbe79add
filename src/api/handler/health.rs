use crate::models::AppState;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "status": "ok", "backend": state.config.api_base() }))
}
