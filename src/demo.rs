//! Demo route tree served by the binary.
//!
//! ```text
//! GET  /
//! GET  /users
//! GET  /users/{id}
//! GET  /groups
//! POST /groups
//! GET  /groups/{id}
//! *    /groups/{id}/subpath
//! ```

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use segment_router::http::{status_fallback, Handler, RequestParamsExt};
use segment_router::routing::{ParamSegment, SegmentRouter, StaticSegment};

pub fn router() -> SegmentRouter<Handler> {
    SegmentRouter::new(status_fallback())
        .segment(
            StaticSegment::root()
                .name("root")
                .handler("GET", Handler::new(get_root)),
        )
        .segment(
            StaticSegment::new("users")
                .name("collection-users")
                .handler("GET", Handler::new(get_users))
                .child(
                    ParamSegment::new("id")
                        .name("read-user")
                        .handler("GET", Handler::new(get_user)),
                ),
        )
        .segment(
            StaticSegment::new("groups")
                .name("collection-groups")
                .handler("GET", Handler::new(get_groups))
                .handler("POST", Handler::new(post_groups))
                .child(
                    ParamSegment::new("id")
                        .name("read-group")
                        .handler("GET", Handler::new(get_group))
                        .child(
                            StaticSegment::new("subpath")
                                .name("read-group-subpath")
                                .any(Handler::new(any_group_subpath)),
                        ),
                ),
        )
}

async fn get_root(_request: Request<Body>) -> Json<serde_json::Value> {
    Json(json!({}))
}

async fn get_users(_request: Request<Body>) -> Json<serde_json::Value> {
    Json(json!([
        { "id": "1", "name": "Alice" },
        { "id": "2", "name": "Bob" },
    ]))
}

async fn get_user(request: Request<Body>) -> Response {
    read_entity(&request, "Alice")
}

async fn get_groups(_request: Request<Body>) -> Json<serde_json::Value> {
    Json(json!([
        { "id": "1", "name": "Group 1" },
        { "id": "2", "name": "Group 2" },
    ]))
}

async fn post_groups(_request: Request<Body>) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        Json(json!({ "id": "3", "name": "Group 3" })),
    )
}

async fn get_group(request: Request<Body>) -> Response {
    read_entity(&request, "Group 1")
}

async fn any_group_subpath(request: Request<Body>) -> Json<serde_json::Value> {
    let params = request.params();
    Json(json!({
        "subpath": true,
        "method": request.method().as_str(),
        "id": params.get("id"),
    }))
}

/// Numeric IDs only; anything else is a 404.
fn read_entity(request: &Request<Body>, name: &str) -> Response {
    let params = request.params();
    let id = params.get("id").unwrap_or_default();
    if id.parse::<u64>().is_err() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Not found" })),
        )
            .into_response();
    }

    Json(json!({
        "id": id,
        "name": name,
        "route": params.route_name(),
    }))
    .into_response()
}
