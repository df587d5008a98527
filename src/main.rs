//! Server binary: explicit pool init at startup, graceful shutdown on ctrl-c.

use cadastro_api::{app, AppConfig, AppState};
use sqlx::mysql::MySqlPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cadastro_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!(max_connections = config.db_max_connections, "pool ready");

    let state = AppState::new(pool.clone());
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Listener is down; release every pooled connection before exiting.
    pool.close().await;
    tracing::info!("pool closed");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}
