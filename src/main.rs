use anyhow::Context;
use tracing_subscriber::EnvFilter;

use vibegen::config::{llm::LlmConfig, server::ServerConfig};
use vibegen::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vibegen=info,tower_http=info")),
        )
        .init();

    let llm_config = LlmConfig::from_env()?;
    let server_config = ServerConfig::from_env()?;

    let state = AppState::from_config(&llm_config)?;
    let listener = server_config
        .bind()
        .await
        .with_context(|| format!("failed to bind {}:{}", server_config.host, server_config.port))?;
    let addr = listener.local_addr()?;

    tracing::info!(%addr, model = %llm_config.model, "server listening");
    axum::serve(listener, app(state)).await?;

    Ok(())
}
