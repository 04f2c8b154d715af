//! Test application factory for integration tests.

use axum::{body::Body, http::Request};
use http_body_util::BodyExt;
use tower::ServiceExt;

use hueprint::models::AppConfig;
use hueprint::server::{build_router, create_app_state};

/// Test application wrapping the production router
pub struct TestApp {
    router: axum::Router,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application with a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        // Build router using shared server module (same as production)
        let router = build_router(create_app_state(config));
        Self { router }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with a raw binary body
    pub async fn post_bytes(&self, path: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/octet-stream")
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Upload an image and return the extracted colors
    pub async fn extract(&self, image: Vec<u8>, count: usize) -> Vec<String> {
        let response = self
            .post_bytes(&format!("/api/extract?count={count}"), image)
            .await;
        super::assert_ok(&response);
        let json: serde_json::Value = response.json();
        json["colors"]
            .as_array()
            .expect("Expected colors array")
            .iter()
            .map(|c| c.as_str().unwrap().to_string())
            .collect()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: axum::http::StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get a header value as string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
