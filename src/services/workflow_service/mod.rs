pub mod registry;
pub mod state;

pub use registry::{WorkflowSnapshot, Workflows};
pub use state::{RequestToken, WorkflowSlot, WorkflowState};
