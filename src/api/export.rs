use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chroma_palette::{ChromaError, Palette};
use serde::Deserialize;

use super::PaletteResponse;
use crate::error::ApiError;
use crate::models::ExportFormat;

/// Query parameters for palette export
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExportQuery {
    /// json (default), css or text
    #[serde(default)]
    pub format: Option<ExportFormat>,
}

/// Export a palette as JSON, CSS variables or plain text
///
/// JSON is served as a `color-palette.json` download.
#[utoipa::path(
    post,
    path = "/api/export",
    params(ExportQuery),
    request_body = PaletteResponse,
    responses(
        (status = 200, description = "Rendered palette", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid or empty color list"),
    ),
    tag = "Palette"
)]
pub async fn handle_export(
    query: Result<Query<ExportQuery>, QueryRejection>,
    body: Result<Json<PaletteResponse>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
    let Json(request) = body.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
    let format = query.format.unwrap_or_default();

    let palette = Palette::from_hex(request.colors.as_slice()).map_err(ChromaError::from)?;
    let rendered = format
        .render(&palette)
        .map_err(|e| ApiError::Internal(format!("Failed to render export: {e}")))?;

    tracing::debug!(format = %format, colors = palette.len(), "Exported palette");

    let mut response = (
        StatusCode::OK,
        [(header::CONTENT_TYPE, format.content_type())],
        rendered,
    )
        .into_response();

    if let Some(name) = format.attachment_name() {
        let disposition = format!("attachment; filename=\"{name}\"");
        if let Ok(value) = HeaderValue::from_str(&disposition) {
            response
                .headers_mut()
                .insert(header::CONTENT_DISPOSITION, value);
        }
    }

    Ok(response)
}
