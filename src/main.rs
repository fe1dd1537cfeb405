mod api;
mod app_state;
mod config;
mod core;
mod domain;
mod errors;
mod routes;

use crate::app_state::build_app_state;
use crate::routes::app_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (used for RUST_LOG; service config itself is compiled in)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cafe_api=info,tower_http=info".into()),
        )
        .init();

    let state = build_app_state().await?;

    let app = app_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config::BIND_ADDR).await?;
    tracing::info!("cafe-api listening on {}", config::BIND_ADDR);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {err}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
