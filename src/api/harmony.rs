use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::services::PaletteService;

/// Query parameters for harmony generation
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HarmonyQuery {
    /// Base color as six hex digits, `#` optional
    pub base: String,
    /// analogous, complementary, triadic or monochrome
    pub kind: String,
}

/// Five colors derived from a base color
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HarmonyResponse {
    /// Normalized base color
    #[schema(example = "#4f8cff")]
    pub base: String,
    /// Harmony kind that was applied
    #[schema(example = "complementary")]
    pub kind: String,
    /// Exactly five colors
    pub colors: Vec<String>,
}

/// Generate a color harmony
#[utoipa::path(
    get,
    path = "/api/harmony",
    params(HarmonyQuery),
    responses(
        (status = 200, description = "Harmony colors", body = HarmonyResponse),
        (status = 400, description = "Invalid base color or harmony kind"),
    ),
    tag = "Harmony"
)]
pub async fn handle_harmony(
    State(service): State<Arc<PaletteService>>,
    query: Result<Query<HarmonyQuery>, QueryRejection>,
) -> Result<Json<HarmonyResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
    let (base, kind, palette) = service.harmony(&query.base, &query.kind)?;

    Ok(Json(HarmonyResponse {
        base: base.to_hex(),
        kind: kind.to_string(),
        colors: palette.hex_strings(),
    }))
}
