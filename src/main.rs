//! KV Store - A concurrent in-memory key-value server
//!
//! Runs two listeners in one process, each serving the same HTTP API over a
//! different backend: the unbounded map store and the bounded LRU store.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tokio::{net::TcpListener, signal, sync::watch};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kvstore::{api::create_router, AppState, Config, StoreKind};

/// Main entry point for the key-value server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Bind one listener per backend
/// 4. Serve both until SIGINT/SIGTERM, then shut both down gracefully
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kvstore=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting KV Store server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: map_port={}, lru_port={}, lru_capacity={}, request_timeout={}s",
        config.map_port, config.lru_port, config.lru_capacity, config.request_timeout
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    tokio::try_join!(
        serve(
            StoreKind::Map,
            AppState::map(),
            config.map_port,
            config.request_timeout(),
            shutdown_rx.clone(),
        ),
        serve(
            StoreKind::Lru,
            AppState::lru(config.lru_capacity),
            config.lru_port,
            config.request_timeout(),
            shutdown_rx,
        ),
    )?;

    info!("Server shutdown complete");
    Ok(())
}

/// Binds `port` and serves `state` until the shutdown channel flips to true.
async fn serve(
    kind: StoreKind,
    state: AppState,
    port: u16,
    request_timeout: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {} backend on {}", kind, addr))?;
    info!("{} backend listening on http://{}", kind, addr);

    axum::serve(listener, create_router(state, request_timeout))
        .with_graceful_shutdown(async move {
            let _ = shutdown.wait_for(|stop| *stop).await;
        })
        .await
        .with_context(|| format!("{} backend server error", kind))?;

    info!("{} backend stopped", kind);
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
