use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::services::PaletteService;

/// Query parameters for palette extraction
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExtractQuery {
    /// Number of colors to extract (2-10, default from config)
    #[serde(default)]
    pub count: Option<usize>,
}

/// A list of colors
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaletteResponse {
    /// Colors as lowercase `#rrggbb`, most frequent first
    #[schema(example = json!(["#2060c0", "#e0e0e0"]))]
    pub colors: Vec<String>,
}

/// Extract dominant colors from an image
///
/// The request body is the raw encoded image (PNG, JPEG, GIF, WebP, ...).
/// Fewer colors than requested are returned when the image has fewer
/// distinct quantized colors.
#[utoipa::path(
    post,
    path = "/api/extract",
    params(ExtractQuery),
    request_body(content = Vec<u8>, description = "Encoded image bytes", content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Dominant colors", body = PaletteResponse),
        (status = 400, description = "Invalid count or empty body"),
        (status = 413, description = "Upload exceeds the configured limit"),
        (status = 422, description = "Body is not a readable image"),
    ),
    tag = "Palette"
)]
pub async fn handle_extract(
    State(service): State<Arc<PaletteService>>,
    query: Result<Query<ExtractQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
    let body = body.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge {
                max: service.config().limits.max_upload_bytes,
            }
        } else {
            ApiError::InvalidInput(e.body_text())
        }
    })?;

    tracing::debug!(size = body.len(), count = ?query.count, "Extract request received");

    // Decoding and resampling are CPU-bound
    let worker = service.clone();
    let palette = tokio::task::spawn_blocking(move || worker.extract_from_bytes(&body, query.count))
        .await
        .map_err(|e| ApiError::Internal(format!("Extraction task failed: {e}")))??;

    Ok(Json(PaletteResponse {
        colors: palette.hex_strings(),
    }))
}
