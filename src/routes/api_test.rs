use std::path::Path as FsPath;

use axum::body::Body;
use axum::http::Request;
use axum::http::header::CONTENT_TYPE;
use futures::StreamExt;
use serde_json::json;
use tower::ServiceExt;

use super::*;
use crate::routes;
use crate::state::test_helpers::{TestApp, blog_doc, project_doc, seed_and_load, test_app};
use crate::store::DocumentStore;

fn router(app: &TestApp) -> axum::Router {
    routes::app(app.state.clone(), FsPath::new("static"))
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn patch_request(path: &str, body: &Value) -> Request<Body> {
    Request::patch(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[test]
fn store_error_to_status_maps_not_found() {
    let err = StoreError::NotFound { collection: Collection::Projects, id: "x".into() };
    assert_eq!(store_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn store_error_to_status_maps_upstream_failures_to_bad_gateway() {
    let err = StoreError::Response { status: 403, message: "denied".into() };
    assert_eq!(store_error_to_status(&err), StatusCode::BAD_GATEWAY);
    assert_eq!(store_error_to_status(&StoreError::Request("timeout".into())), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn list_returns_snapshot_json() {
    let app = test_app();
    seed_and_load(
        &app,
        vec![
            project_doc("p1", "First", "2024-01-01T00:00:00Z"),
            project_doc("p2", "Second", "2025-01-01T00:00:00Z"),
        ],
        vec![],
    )
    .await;

    let response = router(&app)
        .oneshot(Request::get("/api/projects").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["loading"], false);
    assert_eq!(body["error"], Value::Null);
    assert_eq!(body["items"][0]["id"], "p2");
    assert_eq!(body["items"][1]["title"], "First");
}

#[tokio::test]
async fn unknown_collection_is_not_found() {
    let app = test_app();
    let response = router(&app)
        .oneshot(Request::get("/api/users").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_merges_fields() {
    let app = test_app();
    seed_and_load(&app, vec![], vec![blog_doc("b1", "Before", "2025-01-01T00:00:00Z")]).await;

    let response = router(&app)
        .oneshot(patch_request("/api/blogs/b1", &json!({ "title": "After" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let docs = app.store.query(Collection::Blogs).await.unwrap();
    assert_eq!(docs[0].fields["title"], "After");
    assert_eq!(docs[0].fields["excerpt"], "Excerpt of Before");
}

#[tokio::test]
async fn patch_unknown_document_is_not_found() {
    let app = test_app();
    let response = router(&app)
        .oneshot(patch_request("/api/projects/missing", &json!({ "title": "x" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_with_wrong_field_type_is_unprocessable() {
    let app = test_app();
    let response = router(&app)
        .oneshot(patch_request("/api/projects/p1", &json!({ "technologies": "Rust" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_removes_document() {
    let app = test_app();
    seed_and_load(&app, vec![project_doc("p1", "Gone", "2025-01-01T00:00:00Z")], vec![]).await;

    let response = router(&app)
        .oneshot(Request::delete("/api/projects/p1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.store.len(Collection::Projects).await, 0);
}

#[tokio::test]
async fn snapshot_stream_yields_current_then_changes() {
    let app = test_app();
    seed_and_load(&app, vec![], vec![]).await;
    let mut stream = Box::pin(snapshot_stream(&app.state.projects));

    assert!(stream.next().await.is_some());

    app.store.seed(Collection::Projects, project_doc("p1", "Fresh", "2025-01-01T00:00:00Z")).await;
    app.state.projects.reload().await.unwrap();

    let next = tokio::time::timeout(std::time::Duration::from_secs(1), stream.next()).await;
    assert!(matches!(next, Ok(Some(Ok(_)))));
}
