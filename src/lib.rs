//! Segment-tree HTTP request router.
//!
//! Routes are declared as a tree of path segments. Each request path is
//! matched one component per level, in declaration order, and resolves to
//! one of three outcomes: found, path not found, or method not allowed.
//!
//! ```
//! use segment_router::routing::{MatchResult, ParamSegment, SegmentRouter, StaticSegment};
//!
//! let router = SegmentRouter::new("fallback")
//!     .segment(StaticSegment::root().name("root").handler("GET", "index"))
//!     .segment(
//!         StaticSegment::new("groups")
//!             .handler("GET", "list-groups")
//!             .child(ParamSegment::new("id").name("read-group").handler("GET", "read-group")),
//!     );
//!
//! let m = router.match_route("GET", "/groups/42");
//! assert_eq!(m.result, MatchResult::Found);
//! assert_eq!(*m.handler, "read-group");
//! assert_eq!(m.params.get("id"), Some("42"));
//! assert_eq!(m.params.route_name(), Some("read-group"));
//!
//! let m = router.match_route("DELETE", "/groups");
//! assert_eq!(m.result, MatchResult::MethodNotAllowed);
//! assert_eq!(*m.handler, "fallback");
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use http::{HttpServer, Handler, RequestParamsExt};
pub use lifecycle::Shutdown;
pub use routing::{MatchResult, Parameters, ParamSegment, SegmentRouter, StaticSegment};
