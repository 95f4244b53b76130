//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Log level configurable via config, `RUST_LOG` wins when set

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(config: &ObservabilityConfig) -> String {
    format!(
        "segment_router={level},tower_http={level}",
        level = config.log_level
    )
}

/// Install the global tracing subscriber.
pub fn init_logging(config: &ObservabilityConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(config))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
