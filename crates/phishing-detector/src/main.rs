use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ai_common::workers_ai::{WorkersAiClient, WorkersAiConfig};

use phishing_detector::config::Config;
use phishing_detector::server::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting phishing-detector");

    let config = Config::from_env()?;

    let ai_config = WorkersAiConfig::from_env()?;
    info!(
        base_url = %ai_config.base_url,
        model = %ai_config.model,
        timeout_ms = ai_config.request_timeout.as_millis(),
        "inference client configured"
    );
    let ai = Arc::new(WorkersAiClient::new(ai_config)?);

    let app = server::router(AppState { ai });

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(addr = %config.listen_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
        .context("server error")?;

    info!("phishing-detector shut down");
    Ok(())
}

async fn wait_for_shutdown() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
