//! chaind monitor host
//!
//! - Strict YAML config (path: argv[1], `CHAIND_CONFIG`, or `chaind.yaml`)
//! - Process gauges registered against the configured presenter
//! - Ops endpoints: /healthz, /readyz, /metrics
//! - Ctrl-C drops readiness before shutting down

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use chaind_monitor::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = config::resolve_path(std::env::args().nth(1), std::env::var("CHAIND_CONFIG").ok());
    let cfg = match config::load_from_file(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(%path, error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };
    let listen = match cfg.listen_addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, "invalid listen address");
            return ExitCode::FAILURE;
        }
    };

    let (state, registered) = AppState::from_config(&cfg);
    if let Err(e) = registered {
        // Metrics are optional; run degraded.
        tracing::warn!(error = %e, "process metrics unavailable");
    }
    let release = cfg.release.as_deref().unwrap_or(env!("CARGO_PKG_VERSION"));
    state.instrumentation().set_release(release);

    let listener = match tokio::net::TcpListener::bind(listen).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%listen, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(%listen, %release, "chaind-monitor starting");
    state.set_ready(true);

    let app = router::build_router(state.clone());
    let shutdown_state = state.clone();
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            shutdown_state.set_ready(false);
            tracing::info!("shutdown requested");
        })
        .await;

    match served {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}
