use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn uploader_for(server: &MockServer) -> CloudinaryUploader {
    let config = MediaConfig {
        cloud_name: "demo".into(),
        upload_preset: "portfolio".into(),
        base_url: server.base_url(),
    };
    CloudinaryUploader::new(config, HttpTimeouts { request_secs: 5, connect_secs: 5 }).unwrap()
}

fn image() -> ImageFile {
    ImageFile {
        file_name: "shot.png".into(),
        content_type: Some("image/png".into()),
        bytes: b"\x89PNG fake".to_vec(),
    }
}

#[tokio::test]
async fn upload_posts_file_and_preset_and_returns_secure_url() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1_1/demo/image/upload")
                .body_contains("name=\"upload_preset\"")
                .body_contains("portfolio")
                .body_contains("filename=\"shot.png\"");
            then.status(200).json_body(json!({
                "public_id": "abc",
                "secure_url": "https://res.cloudinary.com/demo/image/upload/abc.png"
            }));
        })
        .await;

    let url = uploader_for(&server).upload(image()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(url, "https://res.cloudinary.com/demo/image/upload/abc.png");
}

#[tokio::test]
async fn rejection_surfaces_host_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1_1/demo/image/upload");
            then.status(400)
                .json_body(json!({ "error": { "message": "Upload preset not found" } }));
        })
        .await;

    let err = uploader_for(&server).upload(image()).await.unwrap_err();

    assert!(matches!(err, UploadError::Rejected { status: 400, .. }));
    assert_eq!(err.to_string(), "Upload preset not found");
}

#[tokio::test]
async fn rejection_without_message_uses_default() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1_1/demo/image/upload");
            then.status(500).body("oops");
        })
        .await;

    let err = uploader_for(&server).upload(image()).await.unwrap_err();
    assert_eq!(err.to_string(), DEFAULT_UPLOAD_ERROR);
}

#[tokio::test]
async fn success_without_secure_url_is_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1_1/demo/image/upload");
            then.status(200).json_body(json!({ "public_id": "abc" }));
        })
        .await;

    let err = uploader_for(&server).upload(image()).await.unwrap_err();
    assert!(matches!(err, UploadError::MissingUrl));
}
