//! Segment tree nodes and the recursive matching logic.
//!
//! # Responsibilities
//! - Match one path component per node (literal or parameter)
//! - Capture parameter values on the way down
//! - Dispatch on the request method once the path is exhausted
//! - Search children in declared order, first definitive result wins
//!
//! # Design Decisions
//! - `PathNotFound` lets the sibling search continue, `MethodNotAllowed` stops it
//! - Exact method handlers always take precedence over `"*"`
//! - Every child attempt gets its own copy of the parameters, so a failed
//!   branch never leaks captures into its siblings

use std::collections::HashMap;
use std::fmt;

use crate::routing::params::Parameters;
use crate::routing::router::MatchResult;

/// Handler key that accepts any request method.
pub const ANY_METHOD: &str = "*";

/// Outcome of matching a path against one segment subtree.
#[derive(Debug)]
pub struct SegmentMatch<'a, H> {
    pub result: MatchResult,
    /// Handler selected by method dispatch, only set for `Found`.
    pub handler: Option<&'a H>,
    pub params: Parameters,
}

impl<'a, H> SegmentMatch<'a, H> {
    fn found(handler: &'a H, params: Parameters) -> Self {
        Self {
            result: MatchResult::Found,
            handler: Some(handler),
            params,
        }
    }

    fn miss(result: MatchResult, params: Parameters) -> Self {
        Self {
            result,
            handler: None,
            params,
        }
    }

    /// Returns true if this outcome ends the sibling search.
    pub fn is_definitive(&self) -> bool {
        self.result != MatchResult::PathNotFound
    }
}

/// A node of the routing tree matching exactly one path component.
pub trait Segment<H>: Send + Sync + fmt::Debug {
    /// Match `value` against this node and `next` against its subtree.
    fn match_path<'a>(
        &'a self,
        method: &str,
        value: &str,
        next: &[&str],
        params: Parameters,
    ) -> SegmentMatch<'a, H>;
}

/// State shared by all segment variants: route name, handlers and children.
struct Node<H> {
    route_name: Option<String>,
    handlers: HashMap<String, H>,
    children: Vec<Box<dyn Segment<H>>>,
}

impl<H> Default for Node<H> {
    fn default() -> Self {
        Self {
            route_name: None,
            handlers: HashMap::new(),
            children: Vec::new(),
        }
    }
}

impl<H> fmt::Debug for Node<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<_> = self.handlers.keys().collect();
        methods.sort();
        f.debug_struct("Node")
            .field("route_name", &self.route_name)
            .field("methods", &methods)
            .field("children", &self.children)
            .finish()
    }
}

impl<H> Node<H> {
    /// Continue below a node that already matched its component.
    fn resolve<'a>(
        &'a self,
        method: &str,
        next: &[&str],
        params: Parameters,
    ) -> SegmentMatch<'a, H> {
        match next.split_first() {
            None => self.dispatch(method, params),
            Some((value, rest)) => match_children(&self.children, method, value, rest, params),
        }
    }

    fn dispatch<'a>(&'a self, method: &str, params: Parameters) -> SegmentMatch<'a, H> {
        let handler = self
            .handlers
            .get(method)
            .or_else(|| self.handlers.get(ANY_METHOD));

        match handler {
            Some(handler) => {
                SegmentMatch::found(handler, params.with_route_name(self.route_name.as_deref()))
            }
            None => SegmentMatch::miss(MatchResult::MethodNotAllowed, params),
        }
    }
}

/// Try `segments` in declared order; the first definitive result wins.
pub(crate) fn match_children<'a, H>(
    segments: &'a [Box<dyn Segment<H>>],
    method: &str,
    value: &str,
    next: &[&str],
    params: Parameters,
) -> SegmentMatch<'a, H> {
    for segment in segments {
        let outcome = segment.match_path(method, value, next, params.clone());
        if outcome.is_definitive() {
            return outcome;
        }
    }
    SegmentMatch::miss(MatchResult::PathNotFound, params)
}

/// Matches a literal path component.
pub struct StaticSegment<H> {
    value: String,
    node: Node<H>,
}

impl<H> StaticSegment<H> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            node: Node::default(),
        }
    }

    /// The root route: matches the single empty component produced by `/`.
    pub fn root() -> Self {
        Self::new("")
    }

    /// Declare the route name surfaced to handlers on a successful match.
    pub fn name(mut self, route_name: impl Into<String>) -> Self {
        self.node.route_name = Some(route_name.into());
        self
    }

    /// Register a handler for an exact request method.
    pub fn handler(mut self, method: impl Into<String>, handler: H) -> Self {
        self.node.handlers.insert(method.into(), handler);
        self
    }

    /// Register a handler used when no exact method handler exists.
    pub fn any(self, handler: H) -> Self {
        self.handler(ANY_METHOD, handler)
    }

    /// Append a child segment; children are tried in the order added.
    pub fn child<S: Segment<H> + 'static>(mut self, segment: S) -> Self {
        self.node.children.push(Box::new(segment));
        self
    }
}

impl<H> fmt::Debug for StaticSegment<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticSegment")
            .field("value", &self.value)
            .field("node", &self.node)
            .finish()
    }
}

impl<H: Send + Sync> Segment<H> for StaticSegment<H> {
    fn match_path<'a>(
        &'a self,
        method: &str,
        value: &str,
        next: &[&str],
        params: Parameters,
    ) -> SegmentMatch<'a, H> {
        if self.value != value {
            return SegmentMatch::miss(MatchResult::PathNotFound, params);
        }
        self.node.resolve(method, next, params)
    }
}

/// Matches any path component, optionally capturing it.
pub struct ParamSegment<H> {
    param_name: Option<String>,
    node: Node<H>,
}

impl<H> ParamSegment<H> {
    /// Capture the component under `param_name`.
    pub fn new(param_name: impl Into<String>) -> Self {
        Self {
            param_name: Some(param_name.into()),
            node: Node::default(),
        }
    }

    /// Consume the component without capturing it.
    pub fn anonymous() -> Self {
        Self {
            param_name: None,
            node: Node::default(),
        }
    }

    pub fn name(mut self, route_name: impl Into<String>) -> Self {
        self.node.route_name = Some(route_name.into());
        self
    }

    pub fn handler(mut self, method: impl Into<String>, handler: H) -> Self {
        self.node.handlers.insert(method.into(), handler);
        self
    }

    pub fn any(self, handler: H) -> Self {
        self.handler(ANY_METHOD, handler)
    }

    pub fn child<S: Segment<H> + 'static>(mut self, segment: S) -> Self {
        self.node.children.push(Box::new(segment));
        self
    }
}

impl<H> fmt::Debug for ParamSegment<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamSegment")
            .field("param_name", &self.param_name)
            .field("node", &self.node)
            .finish()
    }
}

impl<H: Send + Sync> Segment<H> for ParamSegment<H> {
    fn match_path<'a>(
        &'a self,
        method: &str,
        value: &str,
        next: &[&str],
        mut params: Parameters,
    ) -> SegmentMatch<'a, H> {
        if let Some(name) = self.param_name.as_deref().filter(|n| !n.is_empty()) {
            params.insert(name, value);
        }
        self.node.resolve(method, next, params)
    }
}
