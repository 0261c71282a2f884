//! HART Server — Application entry point.

use hart_server::config::ServerConfig;
use hart_server::{AppState, router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("hart=info".parse()?))
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(config.auth);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "HART server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
