use crate::error::WorkflowError;
use crate::models::WorkflowKind;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;
use uuid::Uuid;

/// Request lifecycle of one workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum WorkflowState<P> {
    Idle,
    Loading,
    Success(P),
    Error(String),
}

impl<P> WorkflowState<P> {
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::Loading => "loading",
            WorkflowState::Success(_) => "success",
            WorkflowState::Error(_) => "error",
        }
    }

    pub fn map<Q>(&self, f: impl FnOnce(&P) -> Q) -> WorkflowState<Q> {
        match self {
            WorkflowState::Idle => WorkflowState::Idle,
            WorkflowState::Loading => WorkflowState::Loading,
            WorkflowState::Success(payload) => WorkflowState::Success(f(payload)),
            WorkflowState::Error(message) => WorkflowState::Error(message.clone()),
        }
    }
}

/// Identifies one submission. Only the newest token may complete a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RequestToken(Uuid);

impl RequestToken {
    fn issue() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Current state of one workflow plus the submission it is waiting on.
#[derive(Debug)]
pub struct WorkflowSlot<P> {
    kind: WorkflowKind,
    state: WorkflowState<P>,
    pending: Option<RequestToken>,
    updated_at: DateTime<Utc>,
}

impl<P> WorkflowSlot<P> {
    pub fn new(kind: WorkflowKind) -> Self {
        Self {
            kind,
            state: WorkflowState::Idle,
            pending: None,
            updated_at: Utc::now(),
        }
    }

    pub fn kind(&self) -> WorkflowKind {
        self.kind
    }

    pub fn state(&self) -> &WorkflowState<P> {
        &self.state
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn set(&mut self, state: WorkflowState<P>) {
        debug!("{}: {} -> {}", self.kind, self.state.name(), state.name());
        self.state = state;
        self.updated_at = Utc::now();
    }

    /// Moves to `Loading`, dropping any previous payload or error, and
    /// supersedes whatever request was outstanding.
    pub fn begin(&mut self) -> RequestToken {
        let token = RequestToken::issue();
        if let Some(previous) = self.pending.replace(token) {
            info!("{}: request {} superseded", self.kind, previous.0);
        }
        self.set(WorkflowState::Loading);
        token
    }

    /// Applies a finished request. Returns false, leaving the slot untouched,
    /// when a newer submission has replaced `token`.
    pub fn complete(&mut self, token: RequestToken, result: Result<P, WorkflowError>) -> bool {
        if self.pending != Some(token) {
            warn!("{}: discarding stale response for {}", self.kind, token.0);
            return false;
        }
        self.pending = None;
        match result {
            Ok(payload) => self.set(WorkflowState::Success(payload)),
            Err(e) => self.set(WorkflowState::Error(e.to_string())),
        }
        true
    }

    /// Records a submission refused before any request was sent. Any request
    /// still in flight is superseded.
    pub fn reject(&mut self, error: &WorkflowError) {
        self.pending = None;
        self.set(WorkflowState::Error(error.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot() -> WorkflowSlot<u32> {
        WorkflowSlot::new(WorkflowKind::SpeedCheck)
    }

    #[test]
    fn starts_idle() {
        let slot = slot();
        assert_eq!(slot.state(), &WorkflowState::Idle);
        assert!(slot.pending.is_none());
    }

    #[test]
    fn success_after_loading() {
        let mut slot = slot();
        let token = slot.begin();
        assert_eq!(slot.state(), &WorkflowState::Loading);
        assert!(slot.complete(token, Ok(7)));
        assert_eq!(slot.state(), &WorkflowState::Success(7));
        assert!(slot.pending.is_none());
    }

    #[test]
    fn error_message_is_user_facing() {
        let mut slot = slot();
        let token = slot.begin();
        slot.complete(token, Err(WorkflowError::Backend("Site unreachable".into())));
        assert_eq!(slot.state(), &WorkflowState::Error("Site unreachable".into()));
    }

    #[test]
    fn begin_drops_previous_payload() {
        let mut slot = slot();
        let first = slot.begin();
        slot.complete(first, Ok(1));
        slot.begin();
        assert_eq!(slot.state(), &WorkflowState::Loading);
    }

    #[test]
    fn last_submission_wins() {
        let mut slot = slot();
        let first = slot.begin();
        let second = slot.begin();

        assert!(slot.complete(second, Ok(2)));
        assert!(!slot.complete(first, Ok(1)));
        assert_eq!(slot.state(), &WorkflowState::Success(2));
    }

    #[test]
    fn stale_response_does_not_end_loading() {
        let mut slot = slot();
        let first = slot.begin();
        let _second = slot.begin();

        assert!(!slot.complete(first, Err(WorkflowError::Backend("boom".into()))));
        assert_eq!(slot.state(), &WorkflowState::Loading);
    }

    #[test]
    fn rejection_supersedes_pending_request() {
        let mut slot = slot();
        let token = slot.begin();
        slot.reject(&WorkflowError::Validation("Please enter a website URL".into()));

        assert!(!slot.complete(token, Ok(3)));
        assert_eq!(
            slot.state(),
            &WorkflowState::Error("Please enter a website URL".into())
        );
    }

    #[test]
    fn serializes_with_status_tag() {
        let state: WorkflowState<u32> = WorkflowState::Success(5);
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::json!({"status": "success", "data": 5})
        );
        let idle: WorkflowState<u32> = WorkflowState::Idle;
        assert_eq!(
            serde_json::to_value(&idle).unwrap(),
            serde_json::json!({"status": "idle"})
        );
    }
}
