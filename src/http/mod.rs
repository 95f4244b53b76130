//! HTTP transport adapter.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware layers)
//!     → request.rs (request ID)
//!     → routing::SegmentRouter (method + path → handler, params)
//!     → request.rs (params and match result into extensions)
//!     → handler.rs (route handler on Found, fallback otherwise)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod server;

pub use handler::{status_fallback, Handler};
pub use request::{MakeRequestUuid, RequestParamsExt, X_REQUEST_ID};
pub use server::{HttpServer, ServerError};
