//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use tokio::net::TcpListener;

use segment_router::config::ServerConfig;
use segment_router::http::{Handler, HttpServer};
use segment_router::lifecycle::Shutdown;
use segment_router::routing::SegmentRouter;

/// Handler answering with a fixed body.
pub fn text_handler(body: &'static str) -> Handler {
    Handler::new(move |_request: Request<Body>| async move { body })
}

/// Build an empty-bodied request.
pub fn request(method: &str, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// Serve `router` on an ephemeral port until the returned shutdown fires.
pub async fn start_server(router: SegmentRouter<Handler>) -> (SocketAddr, Arc<Shutdown>) {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let server = HttpServer::new(config, router);
    let listener: TcpListener = server.bind().await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Arc::new(Shutdown::new());
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}
