//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging, warms reference data, starts the
//! health side-channel and runs the configured MCP transport until it ends or
//! a shutdown signal arrives.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use logistics_mcp_server::core::{Config, LogisticsServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!(
        "Starting {} v{}",
        config.server.display_name, config.server.version
    );

    let server = LogisticsServer::new(config.clone());
    server.reference().warm();

    #[cfg(feature = "health")]
    let health = logistics_mcp_server::core::health::spawn(
        &config,
        std::sync::Arc::new(logistics_mcp_server::core::SystemClock),
    );

    let transport = TransportService::new(config.transport);

    tokio::select! {
        result = transport.run(server) => result?,
        _ = shutdown_signal() => warn!("Graceful shutdown requested"),
    }

    #[cfg(feature = "health")]
    if let Some(handle) = health {
        handle.abort();
    }

    info!("Server shutting down");

    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the MCP protocol.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
