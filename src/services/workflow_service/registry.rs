use super::state::{WorkflowSlot, WorkflowState};
use crate::error::WorkflowError;
use crate::models::{
    AssessmentPayload, AssessmentRequest, CompareRequest, ComparisonPayload, HeatmapPayload,
    SpeedCheckPayload, TierFilter, UrlRequest, WorkflowKind,
};
use crate::services::analysis_service::{
    assessment_view, comparison_view, heatmap_view, speed_view, WorkflowView,
};
use crate::services::backend_service::BackendClient;
use crate::utils::is_blank;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;
use std::future::Future;
use tokio::sync::Mutex;

/// State of one workflow as handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowSnapshot {
    pub workflow: WorkflowKind,
    pub state: WorkflowState<WorkflowView>,
    pub updated_at: DateTime<Utc>,
}

/// The four independent workflows. Each slot has its own lock, which is
/// never held while the backend call is in flight.
pub struct Workflows {
    comparison: Mutex<WorkflowSlot<ComparisonPayload>>,
    speed_check: Mutex<WorkflowSlot<SpeedCheckPayload>>,
    heatmap: Mutex<WorkflowSlot<HeatmapPayload>>,
    assessment: Mutex<WorkflowSlot<AssessmentPayload>>,
}

impl Default for Workflows {
    fn default() -> Self {
        Self {
            comparison: Mutex::new(WorkflowSlot::new(WorkflowKind::Comparison)),
            speed_check: Mutex::new(WorkflowSlot::new(WorkflowKind::SpeedCheck)),
            heatmap: Mutex::new(WorkflowSlot::new(WorkflowKind::Heatmap)),
            assessment: Mutex::new(WorkflowSlot::new(WorkflowKind::Assessment)),
        }
    }
}

async fn reject<P>(slot: &Mutex<WorkflowSlot<P>>) -> Result<(), WorkflowError> {
    let mut slot = slot.lock().await;
    let error = WorkflowError::Validation(slot.kind().validation_error().to_string());
    warn!("{}: rejected submission: {}", slot.kind(), error);
    slot.reject(&error);
    Err(error)
}

/// Begin, await the backend, then complete under the same token.
///
/// A submission superseded while in flight reports `Ok`: its outcome was
/// discarded, and the caller should read the current state instead.
async fn run<P, F>(slot: &Mutex<WorkflowSlot<P>>, call: F) -> Result<(), WorkflowError>
where
    F: Future<Output = Result<P, WorkflowError>>,
{
    let (kind, token) = {
        let mut slot = slot.lock().await;
        (slot.kind(), slot.begin())
    };

    let result = call.await;
    let outcome = match &result {
        Ok(_) => Ok(()),
        Err(e) => Err(e.clone()),
    };

    if !slot.lock().await.complete(token, result) {
        return Ok(());
    }
    let status = if outcome.is_ok() { "success" } else { "error" };
    info!("{}: request finished with {}", kind, status);
    outcome
}

fn snapshot_of<P>(
    slot: &WorkflowSlot<P>,
    render: impl FnOnce(&P) -> WorkflowView,
) -> WorkflowSnapshot {
    WorkflowSnapshot {
        workflow: slot.kind(),
        state: slot.state().map(render),
        updated_at: slot.updated_at(),
    }
}

impl Workflows {
    pub async fn submit_comparison(
        &self,
        client: &BackendClient,
        request: &CompareRequest,
    ) -> Result<(), WorkflowError> {
        if is_blank(&request.url_a) || is_blank(&request.url_b) {
            return reject(&self.comparison).await;
        }
        run(&self.comparison, client.compare(&request.url_a, &request.url_b)).await
    }

    pub async fn submit_speed_check(
        &self,
        client: &BackendClient,
        request: &UrlRequest,
    ) -> Result<(), WorkflowError> {
        if is_blank(&request.url) {
            return reject(&self.speed_check).await;
        }
        run(&self.speed_check, client.check_speed(&request.url)).await
    }

    pub async fn submit_heatmap(
        &self,
        client: &BackendClient,
        request: &UrlRequest,
    ) -> Result<(), WorkflowError> {
        if is_blank(&request.url) {
            return reject(&self.heatmap).await;
        }
        run(&self.heatmap, client.analyze_heatmap(&request.url)).await
    }

    pub async fn submit_assessment(
        &self,
        client: &BackendClient,
        request: &AssessmentRequest,
    ) -> Result<(), WorkflowError> {
        if is_blank(&request.url) {
            return reject(&self.assessment).await;
        }
        run(&self.assessment, client.assess_page(request)).await
    }

    /// Current state of `kind`, with any payload rendered to its view-model.
    /// `filter` only affects the heatmap overlays.
    pub async fn snapshot(&self, kind: WorkflowKind, filter: TierFilter) -> WorkflowSnapshot {
        match kind {
            WorkflowKind::Comparison => {
                let slot = self.comparison.lock().await;
                snapshot_of(&*slot, |p| WorkflowView::Comparison(Box::new(comparison_view(p))))
            }
            WorkflowKind::SpeedCheck => {
                let slot = self.speed_check.lock().await;
                snapshot_of(&*slot, |p| WorkflowView::SpeedCheck(Box::new(speed_view(p))))
            }
            WorkflowKind::Heatmap => {
                let slot = self.heatmap.lock().await;
                snapshot_of(&*slot, |p| {
                    WorkflowView::Heatmap(Box::new(heatmap_view(p, filter)))
                })
            }
            WorkflowKind::Assessment => {
                let slot = self.assessment.lock().await;
                snapshot_of(&*slot, |p| WorkflowView::Assessment(Box::new(assessment_view(p))))
            }
        }
    }
}
