use std::path::Path;

use axum::body::Body;
use axum::http::Request;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use client::pages::dashboard::{NO_BLOGS_MESSAGE, NO_PROJECTS_MESSAGE};
use tower::ServiceExt;

use super::*;
use crate::routes;
use crate::state::test_helpers::{FAKE_IMAGE_URL, TestApp, project_doc, seed_and_load, test_app};
use crate::store::{Collection, DocumentStore};

const BOUNDARY: &str = "folio-test-boundary";

/// Build a multipart body from text fields and an optional `image` file.
fn multipart_body(fields: &[(&str, &str)], image: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n").as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{IMAGE_FIELD}\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn post_form(app: &TestApp, path: &str, body: Vec<u8>) -> Response {
    let router = routes::app(app.state.clone(), Path::new("static"));
    let request = Request::post(path)
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap();
    router.oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn valid_project_submission_writes_once_and_redirects() {
    let app = test_app();
    let body = multipart_body(
        &[
            ("title", "Folio"),
            ("description", "Portfolio site"),
            ("technologies", "Rust, Axum"),
            ("githubUrl", ""),
            ("demoUrl", "https://folio.example"),
        ],
        Some(("shot.png", b"png-bytes")),
    );

    let response = post_form(&app, "/admin/add-project", body).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/admin/add-project");
    let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("folio_toast=project-added"));
    let docs = app.store.query(Collection::Projects).await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].fields["imageUrl"], FAKE_IMAGE_URL);
    assert_eq!(docs[0].fields["demoUrl"], "https://folio.example");
    assert_eq!(app.media.upload_count(), 1);
}

#[tokio::test]
async fn blog_submission_with_missing_fields_rerenders_with_errors() {
    let app = test_app();
    let body = multipart_body(&[("title", "Draft title"), ("excerpt", " "), ("content", "")], Some(("a.png", b"x")));

    let response = post_form(&app, "/admin/add-blog", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("Excerpt is required"));
    assert!(html.contains("Content is required"));
    assert!(!html.contains("Title is required"));
    assert!(html.contains("value=\"Draft title\""));
    assert_eq!(app.store.len(Collection::Blogs).await, 0);
    assert_eq!(app.media.upload_count(), 0);
}

#[tokio::test]
async fn empty_file_input_counts_as_missing_image() {
    let app = test_app();
    let body = multipart_body(
        &[("title", "T"), ("excerpt", "E"), ("content", "C")],
        Some(("", b"")),
    );

    let response = post_form(&app, "/admin/add-blog", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(Notice::BlogImageMissing.message()));
    assert_eq!(app.store.len(Collection::Blogs).await, 0);
}

#[tokio::test]
async fn flash_notice_renders_once_on_form_page() {
    let app = test_app();
    let router = routes::app(app.state.clone(), Path::new("static"));
    let request = Request::get("/admin/add-project")
        .header(COOKIE, "folio_toast=project-added")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cleared = response.headers()[SET_COOKIE].to_str().unwrap().to_owned();
    assert!(cleared.starts_with("folio_toast=;"));
    let html = body_text(response).await;
    assert!(html.contains(Notice::ProjectAdded.message()));
}

#[tokio::test]
async fn dashboard_shows_counts_and_empty_blog_state() {
    let app = test_app();
    seed_and_load(&app, vec![project_doc("p1", "Only Project", "2025-01-01T00:00:00Z")], vec![]).await;
    let router = routes::app(app.state.clone(), Path::new("static"));

    let response = router
        .oneshot(Request::get("/admin").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Only Project"));
    assert!(html.contains(NO_BLOGS_MESSAGE));
    assert!(!html.contains(NO_PROJECTS_MESSAGE));
}
