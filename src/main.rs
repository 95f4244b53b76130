//! Segment router demo server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http::server (Axum, request ID, timeout)   │
//!                           │        │                                     │
//!                           │        ▼                                     │
//!                           │   routing::SegmentRouter                     │
//!                           │   (method, path) → result, handler, params   │
//!                           │        │                                     │
//!                           │        ▼                                     │
//!     Client Response       │   route handler  /  fallback (404 / 405)     │
//!     ◀─────────────────────┼────────┘                                     │
//!                           │                                              │
//!                           │   config · observability · lifecycle         │
//!                           └──────────────────────────────────────────────┘
//! ```

mod demo;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use segment_router::config::{load_config, ServerConfig};
use segment_router::http::HttpServer;
use segment_router::lifecycle::Shutdown;
use segment_router::observability::{init_logging, init_metrics};

#[derive(Parser)]
#[command(name = "segment-router")]
#[command(about = "Demo HTTP server routed by a segment tree", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let server = HttpServer::new(config, demo::router());
    let listener = server.bind().await?;

    let shutdown = Arc::new(Shutdown::new());
    shutdown.listen_for_signals();

    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
