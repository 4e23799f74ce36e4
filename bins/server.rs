use configs::{AppConfig, LogFormat};
use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => common::utils::logging::init_logging_default(),
        LogFormat::Json => common::utils::logging::init_logging_json(),
    }
    info!(service = "store-registry", event = "logger_init", ?format, "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    // .env before anything reads RUST_LOG / CONFIG_PATH
    dotenv().ok();

    // Global subscriber depends on the config; log its loading under a temporary one
    let config = common::utils::logging::with_bootstrap_logging(server::load_config);
    let format = config.as_ref().map(|c| c.logging.format).unwrap_or_default();
    init_logging(format);

    let config: AppConfig = match config {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "store-registry", event = "config_invalid", error = %e, "cannot load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "store-registry",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = config.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "store-registry", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "store-registry",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "store registry starting"
    );

    // run_with_config returns once Ctrl+C has drained in-flight requests
    let result = rt.block_on(async move {
        let server_task = tokio::spawn(server::run_with_config(config));
        server_task.await
    });

    match result {
        Ok(Ok(())) => {
            info!(service = "store-registry", event = "stop", %service_id, pid, "store registry stopped");
            std::process::ExitCode::SUCCESS
        }
        Ok(Err(e)) => {
            error!(service = "store-registry", event = "run_failed", error = %e, "server::run_with_config returned error");
            std::process::ExitCode::FAILURE
        }
        Err(e) => {
            warn!(service = "store-registry", event = "task_join_error", error = %e, "server task join error");
            std::process::ExitCode::FAILURE
        }
    }
}
