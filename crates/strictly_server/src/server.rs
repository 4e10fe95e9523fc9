//! HTTP server lifecycle.

use crate::api::{AppState, router};
use crate::config::ServerConfig;
use crate::repository::{BoardRepository, MemoryRepository};
use anyhow::{Context, Result};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Binds the configured address and serves until Ctrl-C.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind((config.host().as_str(), *config.port()))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host(), config.port()))?;

    run(listener, config, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` resolves.
#[instrument(skip_all)]
pub async fn run(
    listener: TcpListener,
    config: ServerConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let repository = Arc::new(MemoryRepository::new(config.ttl()));
    let purge = spawn_purge_task(repository.clone(), config.purge_interval());
    let app = router(AppState::new(repository, Arc::new(config)));

    let addr = listener.local_addr().context("Listener has no local address")?;
    info!(%addr, "Server ready");
    info!("Routes: POST /game, PUT /move/{{id}}/{{player}}/{{row}}/{{col}}");

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error");

    purge.abort();
    info!("Server stopped");
    result
}

/// Periodically drops expired boards.
#[instrument(skip(repository))]
fn spawn_purge_task(repository: Arc<dyn BoardRepository>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            match repository.purge_expired() {
                Ok(removed) => debug!(removed, "Purge sweep finished"),
                Err(e) => warn!(error = %e, "Purge sweep failed"),
            }
        }
    })
}

async fn shutdown_signal() {
    after_ctrl_c(tokio::signal::ctrl_c().await).await
}

/// Resolves once Ctrl-C arrived. Without a signal handler there is no way to
/// ask for shutdown, so the server keeps running.
async fn after_ctrl_c(signal: std::io::Result<()>) {
    match signal {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for Ctrl-C, serving until killed");
            std::future::pending::<()>().await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ctrl_c_shuts_down() {
        let done = tokio::time::timeout(Duration::from_secs(1), after_ctrl_c(Ok(()))).await;
        assert!(done.is_ok());
    }

    #[tokio::test]
    async fn test_missing_signal_handler_keeps_serving() {
        let failed = Err(std::io::Error::other("no signal driver"));
        let done = tokio::time::timeout(Duration::from_millis(50), after_ctrl_c(failed)).await;
        assert!(done.is_err());
    }
}
