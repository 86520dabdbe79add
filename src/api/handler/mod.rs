pub mod health;
pub mod view;
pub mod workflow;

pub use health::health_handler;
pub use view::render_view_handler;
pub use workflow::{submit_workflow_handler, workflow_state_handler};

use crate::error::ApiError;
use crate::models::WorkflowKind;

fn parse_workflow(name: &str) -> Result<WorkflowKind, ApiError> {
    name.parse().map_err(ApiError::NotFound)
}
