//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (split path, try top-level segments in order)
//!     → segment.rs (descend one component per node, capture params)
//!     → segment.rs (method dispatch once the path is exhausted)
//!     → Return: Found / PathNotFound / MethodNotAllowed + handler + params
//!
//! Tree Construction (at startup):
//!     StaticSegment / ParamSegment builders
//!     → nested children in declared order
//!     → Freeze as immutable SegmentRouter
//! ```
//!
//! # Design Decisions
//! - Tree built once, immutable at runtime
//! - No regex, no catch-all segments
//! - Deterministic: first match wins, in declaration order
//! - Ambiguous trees are not rejected; declaration order decides

pub mod params;
pub mod router;
pub mod segment;

pub use params::{Parameters, ROUTE_NAME_PARAM};
pub use router::{split_path, MatchResult, RouteMatch, SegmentRouter};
pub use segment::{ParamSegment, Segment, SegmentMatch, StaticSegment, ANY_METHOD};
