//! Strategy Engine Binary
//!
//! Starts the strategy calculation service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin strategy-engine
//! ```
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STRATEGY_ENGINE_HOST`: Bind address (default: 127.0.0.1)
//! - `STRATEGY_ENGINE_PORT`: HTTP port (default: 5001)
//! - `STRATEGY_ENGINE_CORS_ORIGINS`: Comma-separated origin allow-list (default: any)
//! - `OTEL_ENABLED`: Export spans over OTLP (default: false)
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP endpoint (default: <http://localhost:4317>)
//! - `OTEL_SERVICE_NAME`: Service name (default: strategy-engine)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;
use std::time::Duration;

use strategy_engine::infrastructure::telemetry;
use strategy_engine::{
    AppState, CalculateStrategyUseCase, HttpServer, PrometheusCalculationObserver, ServiceConfig,
    create_router, init_metrics,
};
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Graceful shutdown timeout.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv();

    let telemetry_guard = telemetry::init();

    tracing::info!(
        otlp_export = telemetry_guard.is_exporting(),
        "Starting Strategy Engine"
    );

    let _metrics_handle = init_metrics();

    let config = ServiceConfig::from_env()?;
    log_config(&config);

    let use_case = CalculateStrategyUseCase::new(Arc::new(PrometheusCalculationObserver));
    let state = AppState::new(use_case, env!("CARGO_PKG_VERSION"));
    let router = create_router(state, &config.cors);

    let server =
        HttpServer::bind(config.server.socket_addr(), router, CancellationToken::new()).await?;

    tracing::info!("Strategy engine ready");

    if let Err(e) = server.run_until(await_shutdown(), SHUTDOWN_TIMEOUT).await {
        tracing::error!(error = %e, "HTTP server stopped with an error");
        return Err(e.into());
    }

    tracing::info!("Strategy engine stopped");
    Ok(())
}

/// Log the parsed configuration.
fn log_config(config: &ServiceConfig) {
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        cors_any_origin = config.cors.allows_any_origin(),
        "Configuration loaded"
    );
    if let Some(origins) = &config.cors.allowed_origins {
        tracing::debug!(origins = ?origins, "CORS allow-list");
    }
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for a shutdown signal (SIGTERM or SIGINT).
#[allow(clippy::expect_used)]
async fn await_shutdown() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
