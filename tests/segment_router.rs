//! Table-driven matching tests over a realistic route tree.

use segment_router::routing::{
    MatchResult, ParamSegment, SegmentRouter, StaticSegment, ROUTE_NAME_PARAM,
};

const FALLBACK: &str = "fallback";

struct Case {
    method: &'static str,
    path: &'static str,
    expected: MatchResult,
    handler: &'static str,
    params: &'static [(&'static str, &'static str)],
}

const fn case(
    method: &'static str,
    path: &'static str,
    expected: MatchResult,
    handler: &'static str,
) -> Case {
    Case {
        method,
        path,
        expected,
        handler,
        params: &[],
    }
}

fn collections_router() -> SegmentRouter<&'static str> {
    SegmentRouter::new(FALLBACK)
        .segment(StaticSegment::root().handler("GET", "root"))
        .segment(
            StaticSegment::new("collection-read-only")
                .handler("GET", "ro-list")
                .child(
                    ParamSegment::new("id")
                        .name("ro-item")
                        .handler("GET", "ro-item")
                        .child(StaticSegment::new("subpath").handler("GET", "ro-subpath")),
                ),
        )
        .segment(
            StaticSegment::new("collection-insertable")
                .handler("GET", "ins-list")
                .handler("POST", "ins-create")
                .child(ParamSegment::new("id").handler("GET", "ins-item")),
        )
        .segment(
            StaticSegment::new("collection-updateable")
                .handler("GET", "upd-list")
                .child(
                    ParamSegment::new("id")
                        .handler("GET", "upd-item")
                        .handler("POST", "upd-update"),
                ),
        )
        .segment(
            StaticSegment::new("collection-read-write")
                .handler("GET", "rw-list")
                .handler("POST", "rw-create")
                .child(StaticSegment::new("any-method").any("rw-any"))
                .child(
                    ParamSegment::new("id")
                        .handler("GET", "rw-item")
                        .handler("POST", "rw-update"),
                ),
        )
}

#[test]
fn test_collections_router() {
    use MatchResult::*;

    let cases = [
        case("GET", "/", Found, "root"),
        case("POST", "/", MethodNotAllowed, FALLBACK),
        case("GET", "/contact", PathNotFound, FALLBACK),
        case("GET", "/collection-read-only", Found, "ro-list"),
        case("POST", "/collection-read-only", MethodNotAllowed, FALLBACK),
        Case {
            params: &[("id", "123"), (ROUTE_NAME_PARAM, "ro-item")],
            ..case("GET", "/collection-read-only/123", Found, "ro-item")
        },
        case("POST", "/collection-read-only/123", MethodNotAllowed, FALLBACK),
        Case {
            params: &[("id", "234")],
            ..case("GET", "/collection-read-only/234/subpath", Found, "ro-subpath")
        },
        case("GET", "/collection-read-only/234/other", PathNotFound, FALLBACK),
        case("GET", "/collection-insertable", Found, "ins-list"),
        case("POST", "/collection-insertable", Found, "ins-create"),
        case("GET", "/collection-insertable/123", Found, "ins-item"),
        case("POST", "/collection-insertable/123", MethodNotAllowed, FALLBACK),
        case("GET", "/collection-updateable", Found, "upd-list"),
        case("POST", "/collection-updateable", MethodNotAllowed, FALLBACK),
        case("GET", "/collection-updateable/123", Found, "upd-item"),
        case("POST", "/collection-updateable/123", Found, "upd-update"),
        case("GET", "/collection-read-write", Found, "rw-list"),
        case("POST", "/collection-read-write", Found, "rw-create"),
        case("GET", "/collection-read-write/123", Found, "rw-item"),
        case("POST", "/collection-read-write/123", Found, "rw-update"),
        case("DELETE", "/collection-read-write/123", MethodNotAllowed, FALLBACK),
        case("GET", "/collection-read-write/any-method", Found, "rw-any"),
        case("POST", "/collection-read-write/any-method", Found, "rw-any"),
        case("DELETE", "/collection-read-write/any-method", Found, "rw-any"),
    ];

    let router = collections_router();
    for case in &cases {
        let m = router.match_route(case.method, case.path);
        assert_eq!(
            m.result, case.expected,
            "{} {}: unexpected result",
            case.method, case.path
        );
        assert_eq!(
            *m.handler, case.handler,
            "{} {}: unexpected handler",
            case.method, case.path
        );
        for (name, value) in case.params {
            assert_eq!(
                m.params.get(name),
                Some(*value),
                "{} {}: param {}",
                case.method,
                case.path,
                name
            );
        }
    }
}

#[test]
fn test_any_method_override() {
    let router = SegmentRouter::new(FALLBACK)
        .segment(StaticSegment::root().any("any").handler("GET", "get"));

    assert_eq!(*router.match_route("GET", "/").handler, "get");
    assert_eq!(*router.match_route("POST", "/").handler, "any");
    assert_eq!(*router.match_route("DELETE", "/").handler, "any");
}

#[test]
fn test_wildcard_only_node_same_handler_for_every_method() {
    let router = SegmentRouter::new(FALLBACK)
        .segment(StaticSegment::new("hook").any("hook"));

    for method in ["GET", "POST", "DELETE", "PATCH"] {
        let m = router.match_route(method, "/hook");
        assert_eq!(m.result, MatchResult::Found, "{method}");
        assert_eq!(*m.handler, "hook", "{method}");
    }
}

#[test]
fn test_collection_subpath_params() {
    let router = SegmentRouter::new(FALLBACK).segment(
        StaticSegment::new("collection").child(
            ParamSegment::new("id").child(StaticSegment::new("subpath").handler("GET", "sub")),
        ),
    );

    let m = router.match_route("GET", "/collection/234/subpath");
    assert_eq!(m.result, MatchResult::Found);
    assert_eq!(m.params.get("id"), Some("234"));
    assert_eq!(m.params.len(), 1);
}

#[test]
fn test_disallowed_method_selects_fallback_without_route_name() {
    let router = SegmentRouter::new(FALLBACK).segment(
        StaticSegment::new("items")
            .name("items")
            .handler("GET", "list")
            .handler("POST", "create"),
    );

    let m = router.match_route("DELETE", "/items");
    assert_eq!(m.result, MatchResult::MethodNotAllowed);
    assert_eq!(*m.handler, FALLBACK);
    assert_eq!(m.params.route_name(), None);
}

#[test]
fn test_deep_method_not_allowed_is_not_masked() {
    // A later top-level segment would match, but the first one already
    // produced a definitive MethodNotAllowed three levels down.
    let router = SegmentRouter::new(FALLBACK)
        .segment(
            StaticSegment::new("a").child(
                StaticSegment::new("b").child(StaticSegment::new("c").handler("GET", "deep")),
            ),
        )
        .segment(ParamSegment::anonymous().child(
            ParamSegment::anonymous().child(ParamSegment::anonymous().any("catch")),
        ));

    let m = router.match_route("POST", "/a/b/c");
    assert_eq!(m.result, MatchResult::MethodNotAllowed);
    assert_eq!(*m.handler, FALLBACK);

    // A path miss in the first branch lets the second one answer
    let m = router.match_route("POST", "/a/b/d");
    assert_eq!(m.result, MatchResult::Found);
    assert_eq!(*m.handler, "catch");
}

#[test]
fn test_concurrent_readers() {
    let router = std::sync::Arc::new(collections_router());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let router = router.clone();
            std::thread::spawn(move || {
                let path = format!("/collection-read-only/{i}");
                let m = router.match_route("GET", &path);
                assert_eq!(m.result, MatchResult::Found);
                m.params.get("id").map(str::to_owned)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(i.to_string()));
    }
}
