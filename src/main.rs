use anyhow::Context;
use log::info;
use sitelens::{router, AppState, Config};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides; `log` records from the library are bridged in.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    let bind_addr = config.bind_addr;
    info!("Using analysis backend at {}", config.api_base());

    let state = Arc::new(AppState::new(config));
    let app = router(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("🚀 Server running on http://{}", bind_addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
