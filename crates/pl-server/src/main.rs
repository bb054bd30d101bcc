use std::sync::Arc;

use tracing::info;

use pl_client::PeopleClient;
use pl_core::AppConfig;
use pl_server::{app, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let client = PeopleClient::new(&config.api)?;
    let state = AppState::new(Arc::new(client));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "peoplelens listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
