//! Request-scoped data.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every request
//! - Expose the matched parameters and match result to handlers
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Missing parameters read as an empty set, never an error

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::routing::{MatchResult, Parameters};

/// Header carrying the request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates a UUID v4 request ID for requests that arrive without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Access to request-scoped routing data.
pub trait RequestParamsExt {
    /// Parameters captured by the router, empty if none were stored.
    fn params(&self) -> Parameters;

    /// Outcome of the routing lookup, if the request went through the router.
    fn match_result(&self) -> Option<MatchResult>;

    /// Name of the matched route, if one was declared.
    fn route_name(&self) -> Option<String> {
        self.params().route_name().map(str::to_owned)
    }

    fn request_id(&self) -> Option<&str>;
}

impl<B> RequestParamsExt for Request<B> {
    fn params(&self) -> Parameters {
        self.extensions()
            .get::<Parameters>()
            .cloned()
            .unwrap_or_default()
    }

    fn match_result(&self) -> Option<MatchResult> {
        self.extensions().get::<MatchResult>().copied()
    }

    fn request_id(&self) -> Option<&str> {
        self.headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_params_absent_is_empty() {
        let request = Request::builder().body(Body::empty()).unwrap();
        assert!(request.params().is_empty());
        assert_eq!(request.match_result(), None);
        assert_eq!(request.route_name(), None);
    }

    #[test]
    fn test_params_from_extensions() {
        let mut request = Request::builder().body(Body::empty()).unwrap();
        let params: Parameters = [("id", "42"), ("__route__", "read-user")].into_iter().collect();
        request.extensions_mut().insert(params);
        request.extensions_mut().insert(MatchResult::Found);

        assert_eq!(request.params().get("id"), Some("42"));
        assert_eq!(request.route_name().as_deref(), Some("read-user"));
        assert_eq!(request.match_result(), Some(MatchResult::Found));
    }

    #[test]
    fn test_make_request_uuid() {
        let request = Request::builder().body(Body::empty()).unwrap();
        let id = MakeRequestUuid.make_request_id(&request).unwrap();
        let value = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(value).is_ok());
    }
}
