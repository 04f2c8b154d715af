//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, State},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api::{self, ApiDoc};
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::PaletteService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub palette: Arc<PaletteService>,
}

/// Create application state from a loaded configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    let config = Arc::new(config);
    let palette = Arc::new(PaletteService::new(config.clone()));

    AppState { config, palette }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.limits.max_upload_bytes;

    Router::new()
        .route("/api/extract", post(handle_extract))
        .route("/api/harmony", get(handle_harmony))
        .route("/api/export", post(api::handle_export))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // OpenAPI documentation
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_extract(
    State(state): State<AppState>,
    query: Result<
        axum::extract::Query<api::ExtractQuery>,
        axum::extract::rejection::QueryRejection,
    >,
    body: Result<axum::body::Bytes, axum::extract::rejection::BytesRejection>,
) -> Result<Json<api::PaletteResponse>, ApiError> {
    api::handle_extract(State(state.palette), query, body).await
}

async fn handle_harmony(
    State(state): State<AppState>,
    query: Result<
        axum::extract::Query<api::HarmonyQuery>,
        axum::extract::rejection::QueryRejection,
    >,
) -> Result<Json<api::HarmonyResponse>, ApiError> {
    api::handle_harmony(State(state.palette), query).await
}
