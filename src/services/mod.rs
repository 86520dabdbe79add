pub mod analysis_service;
pub mod backend_service;
pub mod workflow_service;

pub use analysis_service::{
    aggregate, compose, grade_score, rate, render_view, AttentionLayout, TierZones, WorkflowView,
};
pub use backend_service::BackendClient;
pub use workflow_service::{WorkflowSnapshot, WorkflowState, Workflows};
