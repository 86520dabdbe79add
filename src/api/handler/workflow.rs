use super::parse_workflow;
use crate::error::ApiError;
use crate::models::{
    AppState, AssessmentRequest, CompareRequest, UrlRequest, ViewParams, WorkflowKind,
};
use crate::services::WorkflowSnapshot;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use log::info;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

fn decode<T: DeserializeOwned>(kind: WorkflowKind, body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid {} request: {}", kind, e)))
}

/// Runs one submission to completion and answers with the workflow's state.
///
/// Validation and backend failures answer `{"detail"}` with 422 or 502. A
/// submission overtaken by a newer one for the same workflow answers 200
/// with the current snapshot, which belongs to the newer submission.
pub async fn submit_workflow_handler(
    State(state): State<Arc<AppState>>,
    Path(workflow): Path<String>,
    Query(params): Query<ViewParams>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<WorkflowSnapshot>, ApiError> {
    let kind = parse_workflow(&workflow)?;
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    info!("Submitting {} request", kind);

    let workflows = &state.workflows;
    let client = &state.client;
    match kind {
        WorkflowKind::Comparison => {
            let request: CompareRequest = decode(kind, body)?;
            workflows.submit_comparison(client, &request).await?
        }
        WorkflowKind::SpeedCheck => {
            let request: UrlRequest = decode(kind, body)?;
            workflows.submit_speed_check(client, &request).await?
        }
        WorkflowKind::Heatmap => {
            let request: UrlRequest = decode(kind, body)?;
            workflows.submit_heatmap(client, &request).await?
        }
        WorkflowKind::Assessment => {
            let request: AssessmentRequest = decode(kind, body)?;
            workflows.submit_assessment(client, &request).await?
        }
    }

    Ok(Json(workflows.snapshot(kind, params.tier).await))
}

pub async fn workflow_state_handler(
    State(state): State<Arc<AppState>>,
    Path(workflow): Path<String>,
    Query(params): Query<ViewParams>,
) -> Result<Json<WorkflowSnapshot>, ApiError> {
    let kind = parse_workflow(&workflow)?;
    Ok(Json(state.workflows.snapshot(kind, params.tier).await))
}
