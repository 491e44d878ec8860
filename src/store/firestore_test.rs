use super::*;
use httpmock::prelude::*;
use httpmock::Method;

const DOCS_PATH: &str = "/projects/folio-test/databases/(default)/documents";

fn store_for(server: &MockServer) -> FirestoreStore {
    let config = FirestoreConfig {
        project_id: "folio-test".into(),
        api_key: Some("test-key".into()),
        base_url: server.base_url(),
        refresh_secs: 30,
    };
    FirestoreStore::new(config, HttpTimeouts { request_secs: 5, connect_secs: 5 }).unwrap()
}

fn fields(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("object")
}

#[tokio::test]
async fn query_orders_by_created_at_and_decodes_documents() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{DOCS_PATH}:runQuery"))
                .query_param("key", "test-key")
                .body_contains("\"DESCENDING\"")
                .body_contains("\"collectionId\":\"projects\"");
            then.status(200).json_body(json!([
                {
                    "document": {
                        "name": "projects/folio-test/databases/(default)/documents/projects/newer",
                        "fields": {
                            "title": { "stringValue": "Newer" },
                            "createdAt": { "timestampValue": "2025-02-01T00:00:00Z" }
                        }
                    },
                    "readTime": "2025-02-02T00:00:00Z"
                },
                {
                    "document": {
                        "name": "projects/folio-test/databases/(default)/documents/projects/older",
                        "fields": {
                            "title": { "stringValue": "Older" },
                            "createdAt": { "timestampValue": "2025-01-01T00:00:00Z" }
                        }
                    },
                    "readTime": "2025-02-02T00:00:00Z"
                }
            ]));
        })
        .await;

    let docs = store_for(&server).query(Collection::Projects).await.unwrap();

    mock.assert_async().await;
    let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["newer", "older"]);
    assert_eq!(docs[0].fields["createdAt"], "2025-02-01T00:00:00Z");
}

#[tokio::test]
async fn query_of_empty_collection_skips_read_time_rows() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(format!("{DOCS_PATH}:runQuery"));
            then.status(200).json_body(json!([{ "readTime": "2025-02-02T00:00:00Z" }]));
        })
        .await;

    let docs = store_for(&server).query(Collection::Blogs).await.unwrap();
    assert!(docs.is_empty());
}

#[tokio::test]
async fn query_skips_documents_with_undecodable_values() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(format!("{DOCS_PATH}:runQuery"));
            then.status(200).json_body(json!([
                {
                    "document": {
                        "name": "projects/folio-test/databases/(default)/documents/blogs/broken",
                        "fields": { "title": { "integerValue": "not-a-number" } }
                    }
                },
                {
                    "document": {
                        "name": "projects/folio-test/databases/(default)/documents/blogs/fine",
                        "fields": {
                            "title": { "stringValue": "Fine" },
                            "createdAt": { "timestampValue": "2025-01-01T00:00:00Z" }
                        }
                    }
                }
            ]));
        })
        .await;

    let docs = store_for(&server).query(Collection::Blogs).await.unwrap();

    let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["fine"]);
}

#[tokio::test]
async fn create_returns_id_from_document_name_and_announces() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{DOCS_PATH}/blogs"))
                .body_contains("\"timestampValue\":\"2025-03-04T10:00:00Z\"");
            then.status(200).json_body(json!({
                "name": "projects/folio-test/databases/(default)/documents/blogs/Xy12",
                "fields": {}
            }));
        })
        .await;

    let store = store_for(&server);
    let mut rx = store.changes();
    let id = store
        .create(Collection::Blogs, fields(json!({ "title": "Hi", "createdAt": "2025-03-04T10:00:00Z" })))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(id, "Xy12");
    assert_eq!(rx.try_recv().unwrap(), Collection::Blogs);
}

#[tokio::test]
async fn update_sends_field_mask_and_requires_existing_document() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::PATCH)
                .path(format!("{DOCS_PATH}/projects/abc"))
                .query_param("updateMask.fieldPaths", "title")
                .query_param("currentDocument.exists", "true");
            then.status(200).json_body(json!({
                "name": "projects/folio-test/databases/(default)/documents/projects/abc"
            }));
        })
        .await;

    store_for(&server)
        .update(Collection::Projects, "abc", fields(json!({ "title": "Renamed" })))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn update_missing_document_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::PATCH).path(format!("{DOCS_PATH}/projects/gone"));
            then.status(404).json_body(json!({ "error": { "code": 404, "message": "No document to update" } }));
        })
        .await;

    let err = store_for(&server)
        .update(Collection::Projects, "gone", fields(json!({ "title": "x" })))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[tokio::test]
async fn rejected_request_surfaces_store_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path(format!("{DOCS_PATH}/blogs/b1"));
            then.status(403)
                .json_body(json!({ "error": { "code": 403, "message": "Missing or insufficient permissions." } }));
        })
        .await;

    let err = store_for(&server).delete(Collection::Blogs, "b1").await.unwrap_err();
    match err {
        StoreError::Response { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Missing or insufficient permissions.");
        }
        other => panic!("unexpected error: {other}"),
    }
}
