pub mod export;
pub mod extract;
pub mod harmony;

pub use export::{handle_export, ExportQuery, __path_handle_export};
pub use extract::{handle_extract, ExtractQuery, PaletteResponse, __path_handle_extract};
pub use harmony::{handle_harmony, HarmonyQuery, HarmonyResponse, __path_handle_harmony};

use utoipa::OpenApi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hueprint API",
        description = "Dominant color extraction and color harmonies",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(handle_extract, handle_harmony, handle_export),
    components(schemas(
        PaletteResponse,
        HarmonyResponse,
        crate::models::ExportFormat,
    )),
    tags(
        (name = "Palette", description = "Palette extraction and export"),
        (name = "Harmony", description = "Color harmony generation")
    )
)]
pub struct ApiDoc;
