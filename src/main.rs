use anyhow::Context;
use notes_api::db::{self, SqliteRepository};
use notes_api::{router, AppState, Config};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::init_db(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;
    let state = AppState::new(SqliteRepository::new(pool));
    let app = router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    wait_for(signal::ctrl_c()).await;
}

/// Resolves once `signal` does. A signal that could not be installed is
/// logged and treated as a shutdown request.
async fn wait_for<F>(signal: F) -> bool
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => true,
        Err(err) => {
            error!(error = %err, "failed to install Ctrl+C handler");
            false
        }
    }
}
