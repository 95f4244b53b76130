//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router fronting the segment router
//! - Wire up middleware (tracing, timeouts, body limits, request ID)
//! - Bind server to listener
//! - Dispatch requests to the matched handler or the fallback

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    Router,
};
use percent_encoding::percent_decode_str;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::handler::Handler;
use crate::http::request::MakeRequestUuid;
use crate::observability::metrics;
use crate::routing::SegmentRouter;

/// Errors raised while binding or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid bind address {address}: {source}")]
    Address {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into the dispatcher.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<SegmentRouter<Handler>>,
}

/// HTTP server dispatching through a segment router.
pub struct HttpServer {
    app: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and route tree.
    pub fn new(config: ServerConfig, router: SegmentRouter<Handler>) -> Self {
        let state = AppState {
            router: Arc::new(router),
        };
        let app = Self::build_router(&config, state);
        Self { app, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The Axum service, for serving elsewhere or driving in-process.
    pub fn app(&self) -> Router {
        self.app.clone()
    }

    /// Bind a listener on the configured address.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let address = &self.config.listener.bind_address;
        let addr: SocketAddr = address.parse().map_err(|source| ServerError::Address {
            address: address.clone(),
            source,
        })?;
        Ok(TcpListener::bind(addr).await?)
    }

    /// Run the server until the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Match the request and hand it to the selected handler.
///
/// The path is percent-decoded before matching, so segments and captured
/// parameters see `a b` rather than `a%20b`. Parameters and the match result
/// travel in the request extensions, so the fallback can tell a 404 from a 405.
async fn dispatch(State(state): State<AppState>, mut request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();
    let path = decode_path(request.uri().path());

    let (result, handler) = {
        let route_match = state.router.match_route(method.as_str(), &path);
        tracing::debug!(
            method = %method,
            path = %path,
            result = %route_match.result,
            route = route_match.params.route_name().unwrap_or("-"),
            "Dispatching request"
        );
        let handler = route_match.handler.clone();
        request.extensions_mut().insert(route_match.params);
        request.extensions_mut().insert(route_match.result);
        (route_match.result, handler)
    };

    let response = handler.call(request).await;
    metrics::record_request(result, response.status().as_u16(), start_time);
    response
}

fn decode_path(path: &str) -> String {
    percent_decode_str(path).decode_utf8_lossy().into_owned()
}
