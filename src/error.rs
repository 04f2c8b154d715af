use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chroma_palette::{ChromaError, MAX_COLORS, MIN_COLORS};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid count {0}: expected {min}..={max}", min = MIN_COLORS, max = MAX_COLORS)]
    InvalidCount(usize),

    #[error("Upload too large (max {max} bytes)")]
    PayloadTooLarge { max: usize },

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Chroma(#[from] ChromaError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Could not read image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image has no pixels: {width}x{height}")]
    Empty { width: u32, height: u32 },

    #[error("Image too large: working size {width}x{height} exceeds {max_pixels} pixels")]
    TooLarge {
        width: u32,
        height: u32,
        max_pixels: u64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::InvalidCount(_) | ApiError::Chroma(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PayloadTooLarge { .. } | ApiError::Image(ImageError::TooLarge { .. }) => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            ApiError::Image(ImageError::Decode(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Image(ImageError::Empty { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Image(ImageError::Io(_)) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_palette::{HarmonyKind, Rgb};

    fn decode_error() -> ImageError {
        let err = image::load_from_memory(b"definitely not an image").unwrap_err();
        ImageError::Decode(err)
    }

    #[test]
    fn test_api_error_invalid_input() {
        let error = ApiError::InvalidInput("empty body".to_string());
        assert_eq!(error.to_string(), "Invalid input: empty body");
    }

    #[test]
    fn test_api_error_invalid_count() {
        let error = ApiError::InvalidCount(12);
        assert_eq!(error.to_string(), "Invalid count 12: expected 2..=10");
    }

    #[test]
    fn test_api_error_payload_too_large() {
        let error = ApiError::PayloadTooLarge { max: 1024 };
        assert_eq!(error.to_string(), "Upload too large (max 1024 bytes)");
    }

    #[test]
    fn test_image_error_empty() {
        let error = ImageError::Empty {
            width: 0,
            height: 4,
        };
        assert_eq!(error.to_string(), "Image has no pixels: 0x4");
    }

    #[test]
    fn test_image_error_too_large() {
        let error = ImageError::TooLarge {
            width: 300,
            height: 300_000,
            max_pixels: 4_000_000,
        };
        assert_eq!(
            error.to_string(),
            "Image too large: working size 300x300000 exceeds 4000000 pixels"
        );
    }

    #[test]
    fn test_image_error_decode_message() {
        assert!(decode_error().to_string().starts_with("Could not read image"));
    }

    #[test]
    fn test_api_error_from_chroma_error() {
        let chroma: ChromaError = "#zzzzzz".parse::<Rgb>().unwrap_err().into();
        let api_error: ApiError = chroma.into();
        match api_error {
            ApiError::Chroma(_) => {}
            _ => panic!("Expected Chroma variant"),
        }

        let chroma: ChromaError = "rainbow".parse::<HarmonyKind>().unwrap_err().into();
        assert!(ApiError::from(chroma).to_string().contains("rainbow"));
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        // InvalidInput -> BAD_REQUEST
        let response = ApiError::InvalidInput("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // InvalidCount -> BAD_REQUEST
        let response = ApiError::InvalidCount(1).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // PayloadTooLarge -> PAYLOAD_TOO_LARGE
        let response = ApiError::PayloadTooLarge { max: 1 }.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        // Oversized working image -> PAYLOAD_TOO_LARGE
        let response = ApiError::Image(ImageError::TooLarge {
            width: 300,
            height: 300_000,
            max_pixels: 1,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        // Decode -> UNPROCESSABLE_ENTITY
        let response = ApiError::Image(decode_error()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        // Empty image -> BAD_REQUEST
        let response = ApiError::Image(ImageError::Empty {
            width: 0,
            height: 0,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Internal -> INTERNAL_SERVER_ERROR
        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
