use std::{future::Future, sync::Arc};

use axum::Router;
use configs::{AppConfig, RegistryConfig};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::store::{InMemoryStoreRepository, StoreService};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load configuration from `CONFIG_PATH` (default `config.toml`). Only when
/// that file does not exist are `SERVER_HOST`, `SERVER_PORT`,
/// `TOKIO_WORKER_THREADS` and `LOG_FORMAT` used instead; a file that exists
/// but cannot be read or parsed is an error.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let path = configs::config_path();
    let loaded = configs::load_from_file(&path)
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let mut cfg = match loaded {
        Some(cfg) => {
            info!(%path, "configuration loaded from file");
            cfg
        }
        None => {
            warn!(%path, "config file not found; using environment");
            from_env()
        }
    };
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

fn from_env() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.server.host = common::env::var_or("SERVER_HOST", &cfg.server.host);
    if let Some(port) = common::env::parse_var::<u16>("SERVER_PORT") {
        cfg.server.port = port;
    }
    if let Some(threads) = common::env::parse_var::<usize>("TOKIO_WORKER_THREADS") {
        cfg.server.worker_threads = Some(threads);
    }
    if let Some(format) = common::env::parse_var("LOG_FORMAT") {
        cfg.logging.format = format;
    }
    cfg
}

/// Construct the registry once for the lifetime of the process.
pub fn build_state(registry: &RegistryConfig) -> ServerState {
    let repo = if registry.seed_example {
        InMemoryStoreRepository::seeded()
    } else {
        InMemoryStoreRepository::new()
    };
    ServerState { stores: StoreService::new(Arc::new(repo)) }
}

/// Serve `state` on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: ServerState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app: Router = routes::build_router(state, build_cors());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Public entry: load configuration, build the app and run until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    let cfg = load_config()?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg.registry);
    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    let local = listener.local_addr()?;
    info!(addr = %local, seeded = cfg.registry.seed_example, "store registry listening");
    serve(listener, state, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutting down");
        return;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}
