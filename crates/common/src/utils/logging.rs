use std::io;
use tracing_subscriber::{fmt, EnvFilter};

fn env_filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,tower_http=info,axum=info`
/// - Writes to stdout to improve visibility in environments that hide stderr
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter_or("info,tower_http=info,axum=info"))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
/// - Respects `RUST_LOG` if set, defaults to `info`
/// - One object per event; span fields such as `store` are included
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter_or("info"))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Run `f` under a temporary compact subscriber.
///
/// For work that happens before the global subscriber can be chosen, such as
/// reading the configuration that picks the log format.
pub fn with_bootstrap_logging<T>(f: impl FnOnce() -> T) -> T {
    let subscriber = fmt()
        .with_env_filter(env_filter_or("info"))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}
