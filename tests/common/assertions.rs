//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a JSON error body with the given status
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected.as_u16(),
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected error message");
}

/// Assert every entry is a lowercase `#rrggbb` color
pub fn assert_hex_colors(colors: &[String]) {
    for color in colors {
        let digits = color
            .strip_prefix('#')
            .unwrap_or_else(|| panic!("Missing '#' in {color:?}"));
        assert!(
            digits.len() == 6
                && digits
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
            "Not a lowercase hex color: {color:?}"
        );
    }
}

/// Assert a harmony response is valid and return its colors
pub fn assert_valid_harmony_response(response: &TestResponse) -> Vec<String> {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    assert!(json["base"].is_string(), "Expected base");
    assert!(json["kind"].is_string(), "Expected kind");
    let colors: Vec<String> = json["colors"]
        .as_array()
        .expect("Expected colors array")
        .iter()
        .map(|c| c.as_str().unwrap().to_string())
        .collect();
    assert_eq!(colors.len(), 5, "Harmony must have five colors");
    assert_hex_colors(&colors);
    colors
}
