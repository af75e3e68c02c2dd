//! File API integration tests: upload, download, delete, presigned URLs.
//!
//! Run with: `cargo test -p depot-api --test files_test`

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::setup_test_app;
use serde_json::Value;

fn text_file(name: &str, contents: &[u8]) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(contents.to_vec())
            .file_name(name)
            .mime_type("text/plain"),
    )
}

#[tokio::test]
async fn upload_returns_key_with_original_name_suffix() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/file")
        .multipart(text_file("a.txt", b"0123456789"))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    let key = body["fileName"].as_str().expect("fileName in response");
    assert!(key.ends_with("-a.txt"));
    // uuid prefix + "-" + original name
    assert_eq!(key.len(), 36 + 1 + "a.txt".len());
}

#[tokio::test]
async fn upload_empty_file_is_rejected() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/file")
        .multipart(text_file("a.txt", b""))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn upload_without_file_field_is_rejected() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_text("comment", "no file here");
    let response = app.client().post("/file").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn uploaded_bytes_download_unchanged() {
    let app = setup_test_app().await;

    let payload = b"0123456789";
    let upload: Value = app
        .client()
        .post("/file")
        .multipart(text_file("a.txt", payload))
        .await
        .json();
    let key = upload["fileName"].as_str().unwrap();

    let response = app
        .client()
        .get("/file")
        .add_query_param("fileName", key)
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.as_bytes().to_vec(), payload.to_vec());

    let disposition = response
        .headers()
        .get("content-disposition")
        .expect("content-disposition header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("a.txt"));
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/octet-stream"
    );
}

#[tokio::test]
async fn download_of_unknown_key_is_404() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/file")
        .add_query_param("fileName", "no-such-key.bin")
        .await;

    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn delete_removes_the_object() {
    let app = setup_test_app().await;

    let upload: Value = app
        .client()
        .post("/file")
        .multipart(text_file("gone.txt", b"bye"))
        .await
        .json();
    let key = upload["fileName"].as_str().unwrap();

    let response = app
        .client()
        .delete("/file")
        .add_query_param("fileName", key)
        .await;
    assert_eq!(response.status_code(), 200);

    let response = app
        .client()
        .get("/file")
        .add_query_param("fileName", key)
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn delete_of_absent_key_succeeds() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .delete("/file")
        .add_query_param("fileName", "never-there.txt")
        .await;

    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn download_url_is_returned_without_checking_existence() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/file/url")
        .add_query_param("fileName", "maybe-later.txt")
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(
        body["url"],
        format!("{}/maybe-later.txt", helpers::TEST_BASE_URL)
    );
}

#[tokio::test]
async fn download_url_rejects_out_of_range_expiry() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/file/url")
        .add_query_param("fileName", "a.txt")
        .add_query_param("expiresInMinutes", 0)
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn health_reports_storage_backend() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "local");
}
