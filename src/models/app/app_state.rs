use crate::config::Config;
use crate::services::{BackendClient, Workflows};

/// Shared by every handler behind an `Arc`.
pub struct AppState {
    pub config: Config,
    pub client: BackendClient,
    pub workflows: Workflows,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = BackendClient::new(&config.api_base());
        Self {
            config,
            client,
            workflows: Workflows::default(),
        }
    }
}
