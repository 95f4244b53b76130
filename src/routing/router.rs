//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the top-level segments and the fallback handler
//! - Split request paths into components
//! - Return the matched handler or an explicit miss with the fallback
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - First match wins, in declared order
//! - Explicit PathNotFound / MethodNotAllowed rather than a silent default

use std::fmt;

use crate::routing::params::Parameters;
use crate::routing::segment::{match_children, Segment};

/// Three-way outcome of a match attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    Found,
    PathNotFound,
    MethodNotAllowed,
}

impl MatchResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchResult::Found => "found",
            MatchResult::PathNotFound => "path_not_found",
            MatchResult::MethodNotAllowed => "method_not_allowed",
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a router lookup.
///
/// `handler` is the route handler on `Found` and the router's fallback
/// otherwise.
#[derive(Debug)]
pub struct RouteMatch<'a, H> {
    pub result: MatchResult,
    pub handler: &'a H,
    pub params: Parameters,
}

impl<H> RouteMatch<'_, H> {
    pub fn is_found(&self) -> bool {
        self.result == MatchResult::Found
    }
}

/// Split a request path into the components matched one per segment.
///
/// Exactly one leading and one trailing `/` are removed; interior repeats
/// are kept as empty components. `/` yields a single empty component, which
/// is what a root `StaticSegment` matches.
pub fn split_path(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    path.split('/').collect()
}

/// Segment-tree router.
pub struct SegmentRouter<H> {
    segments: Vec<Box<dyn Segment<H>>>,
    fallback: H,
}

impl<H: Send + Sync + 'static> SegmentRouter<H> {
    /// Create an empty router; every request resolves to `fallback`.
    pub fn new(fallback: H) -> Self {
        Self {
            segments: Vec::new(),
            fallback,
        }
    }

    pub fn from_parts(segments: Vec<Box<dyn Segment<H>>>, fallback: H) -> Self {
        Self { segments, fallback }
    }

    /// Append a top-level segment; segments are tried in the order added.
    pub fn segment<S: Segment<H> + 'static>(mut self, segment: S) -> Self {
        self.segments.push(Box::new(segment));
        self
    }
}

impl<H> SegmentRouter<H> {
    pub fn fallback(&self) -> &H {
        &self.fallback
    }

    pub fn segments(&self) -> &[Box<dyn Segment<H>>] {
        &self.segments
    }

    /// Match a request method and path against the segment tree.
    pub fn match_route(&self, method: &str, path: &str) -> RouteMatch<'_, H> {
        let parts = split_path(path);
        let (first, rest) = match parts.split_first() {
            Some(split) => split,
            None => return self.miss(MatchResult::PathNotFound, Parameters::new()),
        };

        // `match_children` keeps the incoming (empty) parameters on a miss
        let outcome = match_children(&self.segments, method, first, rest, Parameters::new());
        let route_match = match (outcome.result, outcome.handler) {
            (MatchResult::Found, Some(handler)) => RouteMatch {
                result: MatchResult::Found,
                handler,
                params: outcome.params,
            },
            (MatchResult::Found, None) | (MatchResult::PathNotFound, _) => {
                self.miss(MatchResult::PathNotFound, Parameters::new())
            }
            (MatchResult::MethodNotAllowed, _) => {
                self.miss(MatchResult::MethodNotAllowed, outcome.params)
            }
        };

        tracing::trace!(
            method = %method,
            path = %path,
            result = %route_match.result,
            "Route matched"
        );
        route_match
    }

    fn miss(&self, result: MatchResult, params: Parameters) -> RouteMatch<'_, H> {
        RouteMatch {
            result,
            handler: &self.fallback,
            params,
        }
    }
}

impl<H> fmt::Debug for SegmentRouter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentRouter")
            .field("segments", &self.segments)
            .finish_non_exhaustive()
    }
}
