//! Type-erased request handlers stored in the segment tree.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures_util::future::{BoxFuture, FutureExt};
use serde_json::json;

use crate::http::request::RequestParamsExt;
use crate::routing::MatchResult;

type BoxedHandlerFn = dyn Fn(Request<Body>) -> BoxFuture<'static, Response> + Send + Sync;

/// An async request handler.
///
/// Cheap to clone; the segment tree holds one per registered method.
#[derive(Clone)]
pub struct Handler {
    inner: Arc<BoxedHandlerFn>,
}

impl Handler {
    /// Wrap an async function taking the raw request.
    pub fn new<F, Fut, R>(f: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        let inner: Arc<BoxedHandlerFn> = Arc::new(move |request: Request<Body>| {
            let fut = f(request);
            async move { fut.await.into_response() }.boxed()
        });
        Self { inner }
    }

    pub async fn call(&self, request: Request<Body>) -> Response {
        (self.inner)(request).await
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}

/// Fallback answering 405 for a disallowed method and 404 otherwise.
pub fn status_fallback() -> Handler {
    Handler::new(|request: Request<Body>| async move {
        match request.match_result() {
            Some(MatchResult::MethodNotAllowed) => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "error": "Method not allowed" })),
            )
                .into_response(),
            _ => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Not found" })),
            )
                .into_response(),
        }
    })
}
