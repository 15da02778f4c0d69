use anyhow::Context;
use tracing_subscriber::EnvFilter;
use wikisearch::api::{AppState, create_router};
use wikisearch::config::Config;
use wikisearch::templates::Templates;
use wikisearch::wikipedia::WikipediaClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level, e.g. RUST_LOG=wikisearch=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = Config::from_env()?;

    let templates = match Templates::load(&config.templates_dir) {
        Ok(templates) => templates,
        Err(e) => {
            tracing::error!("Unable to initialize HTML templates: {:#}", e);
            return Err(e);
        }
    };

    let wikipedia = WikipediaClient::new(config.wikipedia_api_url.clone())
        .context("Failed to create Wikipedia client")?;
    let app = create_router(AppState::new(wikipedia, templates), &config.assets_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;

    tracing::info!(
        port = config.port,
        "Starting Wikipedia App Server on port '{}'",
        config.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Wikipedia App Server Closed")?;

    tracing::info!("Wikipedia App Server Closed");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
