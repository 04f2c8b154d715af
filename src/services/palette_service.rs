use chroma_palette::{
    ChromaError, DominantColorExtractor, HarmonyKind, Palette, PixelBuffer, Rgb, MAX_COLORS,
    MIN_COLORS,
};
use std::path::Path;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::image_loader;

/// Palette extraction and harmony generation on top of the configured limits
pub struct PaletteService {
    config: Arc<AppConfig>,
    extractor: DominantColorExtractor,
}

impl PaletteService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            extractor: DominantColorExtractor::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Validate a requested color count, falling back to the configured default
    pub fn resolve_count(&self, requested: Option<usize>) -> Result<usize, ApiError> {
        let count = requested.unwrap_or(self.config.extraction.default_count);
        if (MIN_COLORS..=MAX_COLORS).contains(&count) {
            Ok(count)
        } else {
            Err(ApiError::InvalidCount(count))
        }
    }

    /// Extract the dominant colors of an encoded image
    pub fn extract_from_bytes(
        &self,
        bytes: &[u8],
        count: Option<usize>,
    ) -> Result<Palette, ApiError> {
        let count = self.resolve_count(count)?;
        let max = self.config.limits.max_upload_bytes;
        if bytes.len() > max {
            return Err(ApiError::PayloadTooLarge { max });
        }
        if bytes.is_empty() {
            return Err(ApiError::InvalidInput("image body is empty".to_string()));
        }

        let image = image_loader::decode_rgba(
            bytes,
            self.config.extraction.sample_width,
            self.config.limits.max_pixels,
        )?;
        self.extract_pixels(image.as_raw(), image.width(), image.height(), count)
    }

    /// Extract the dominant colors of an image file
    ///
    /// The upload limit does not apply to local files.
    pub fn extract_from_file(&self, path: &Path, count: Option<usize>) -> Result<Palette, ApiError> {
        let count = self.resolve_count(count)?;
        let image = image_loader::load_file(
            path,
            self.config.extraction.sample_width,
            self.config.limits.max_pixels,
        )?;
        self.extract_pixels(image.as_raw(), image.width(), image.height(), count)
    }

    /// Extract from an already decoded RGBA8 buffer
    pub fn extract_pixels(
        &self,
        rgba: &[u8],
        width: u32,
        height: u32,
        count: usize,
    ) -> Result<Palette, ApiError> {
        let buffer = PixelBuffer::new(rgba, width, height).map_err(ChromaError::from)?;
        let palette = self
            .extractor
            .extract(&buffer, count)
            .map_err(ChromaError::from)?;

        tracing::info!(
            width,
            height,
            count,
            colors = palette.len(),
            "Extracted palette"
        );
        Ok(palette)
    }

    /// Five-color harmony of a hex base color
    pub fn harmony(&self, base: &str, kind: &str) -> Result<(Rgb, HarmonyKind, Palette), ApiError> {
        let base: Rgb = base.parse().map_err(ChromaError::from)?;
        let kind: HarmonyKind = kind.parse().map_err(ChromaError::from)?;
        let palette = Palette::new(vec![base])
            .map_err(ChromaError::from)?
            .harmonize(kind);

        tracing::debug!(base = %base, kind = %kind, "Generated harmony");
        Ok((base, kind, palette))
    }
}
