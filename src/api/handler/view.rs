use super::parse_workflow;
use crate::error::ApiError;
use crate::models::ViewParams;
use crate::services::{render_view, WorkflowView};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query};
use serde_json::Value;

/// Renders a caller-supplied payload without contacting the backend.
pub async fn render_view_handler(
    Path(workflow): Path<String>,
    Query(params): Query<ViewParams>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<WorkflowView>, ApiError> {
    let kind = parse_workflow(&workflow)?;
    let Json(payload) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    render_view(kind, payload, params.tier)
        .map(Json)
        .map_err(|e| ApiError::BadRequest(format!("Invalid {} payload: {}", kind, e)))
}
