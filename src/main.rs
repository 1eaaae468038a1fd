//! Catalog Cache - A product catalog service with a cache-aside read layer
//!
//! Serves catalog CRUD and filtered queries over HTTP, absorbing read
//! traffic with a TTL-expiring cache in front of the document store.

mod api;
mod cache;
mod catalog;
mod config;
mod error;
mod models;
mod store;
mod tasks;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use cache::{CacheClient, MemoryCache};
use catalog::CatalogService;
use config::Config;
use store::MemoryStore;
use tasks::spawn_cleanup_task;

/// Main entry point for the catalog service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Construct the store and cache backends once, up front
/// 4. Start the background TTL sweep for the in-memory cache
/// 5. Wire the cache-aside coordinator and the Axum router
/// 6. Start the HTTP server on the configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Catalog Cache Service");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: cache={}:{}, store={} ({}), item_ttl={}s, list_ttl={}s, port={}",
        config.cache_host,
        config.cache_port,
        config.store_uri,
        config.store_db,
        config.item_cache_ttl,
        config.list_cache_ttl,
        config.server_port
    );

    // Construct backend handles once; process-wide lifetime, no lazy
    // first-use initialization
    let store = Arc::new(MemoryStore::new());
    let cache_backend = Arc::new(MemoryCache::new());
    info!("Store and cache backends initialized");

    // Start the background TTL sweep for the in-memory cache
    let cleanup_handle = spawn_cleanup_task(cache_backend.clone(), config.cleanup_interval);
    info!("Background cleanup task started");

    // Wire the coordinator and router
    let catalog = CatalogService::from_config(store, CacheClient::new(cache_backend), &config);
    let app = create_router(AppState::new(catalog));

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .unwrap();

    info!("Server shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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

    // Abort the cleanup task
    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
