pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use api::router;
pub use config::Config;
pub use error::{ApiError, ConfigError, WorkflowError};
pub use models::AppState;
