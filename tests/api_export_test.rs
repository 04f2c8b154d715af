//! Tests for /api/export endpoint.

mod common;

use axum::http::StatusCode;
use common::TestApp;
use pretty_assertions::assert_eq;

const BODY: &str = r##"{"colors": ["#2060C0", "e0e0e0", "#ffa000"]}"##;

#[tokio::test]
async fn test_export_json_download() {
    let app = TestApp::new();

    let response = app.post_json("/api/export?format=json", BODY).await;

    common::assert_ok(&response);
    assert_eq!(response.header("content-type"), Some("application/json"));
    assert_eq!(
        response.header("content-disposition"),
        Some("attachment; filename=\"color-palette.json\"")
    );
    assert_eq!(
        response.text(),
        "[\n  \"#2060c0\",\n  \"#e0e0e0\",\n  \"#ffa000\"\n]"
    );
}

#[tokio::test]
async fn test_export_defaults_to_json() {
    let app = TestApp::new();

    let response = app.post_json("/api/export", BODY).await;

    common::assert_ok(&response);
    let colors: Vec<String> = response.json();
    assert_eq!(colors, vec!["#2060c0", "#e0e0e0", "#ffa000"]);
}

#[tokio::test]
async fn test_export_css_variables() {
    let app = TestApp::new();

    let response = app.post_json("/api/export?format=css", BODY).await;

    common::assert_ok(&response);
    assert_eq!(
        response.header("content-type"),
        Some("text/css; charset=utf-8")
    );
    assert!(response.header("content-disposition").is_none());
    assert_eq!(
        response.text(),
        "--color-1: #2060c0;\n--color-2: #e0e0e0;\n--color-3: #ffa000;"
    );
}

#[tokio::test]
async fn test_export_text() {
    let app = TestApp::new();

    let response = app.post_json("/api/export?format=text", BODY).await;

    common::assert_ok(&response);
    assert_eq!(response.text(), "#2060c0\n#e0e0e0\n#ffa000");
}

#[tokio::test]
async fn test_export_unknown_format() {
    let app = TestApp::new();

    let response = app.post_json("/api/export?format=xml", BODY).await;

    common::assert_json_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_export_empty_palette() {
    let app = TestApp::new();

    let response = app.post_json("/api/export", r#"{"colors": []}"#).await;

    common::assert_json_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_export_invalid_color() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/export", r##"{"colors": ["#2060c0", "#nothex"]}"##)
        .await;

    common::assert_json_error(&response, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = response.json();
    assert!(json["error"].as_str().unwrap().contains("index 1"), "{json}");
}

#[tokio::test]
async fn test_export_malformed_json() {
    let app = TestApp::new();

    let response = app.post_json("/api/export", "not valid json").await;

    common::assert_json_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_export_txt_alias() {
    let app = TestApp::new();

    let response = app.post_json("/api/export?format=txt", BODY).await;

    common::assert_ok(&response);
    assert_eq!(response.text(), "#2060c0\n#e0e0e0\n#ffa000");
}
