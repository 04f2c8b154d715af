use chroma_palette::{DEFAULT_COLORS, MAX_COLORS, MIN_COLORS};
use serde::Deserialize;
use std::path::Path;

/// Width images are resampled to before extraction
pub const DEFAULT_SAMPLE_WIDTH: u32 = 300;

/// Largest accepted working width
pub const MAX_SAMPLE_WIDTH: u32 = 4096;

/// Default upload limit (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Default cap on the resampled working image (16 MB of RGBA)
pub const DEFAULT_MAX_PIXELS: u64 = 4_000_000;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Palette extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Request limits
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Settings for dominant-color extraction
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Number of colors when the caller does not ask for a specific count
    #[serde(default = "default_count")]
    pub default_count: usize,

    /// Images are resampled to this width (keeping aspect ratio) before sampling
    #[serde(default = "default_sample_width")]
    pub sample_width: u32,
}

fn default_count() -> usize {
    DEFAULT_COLORS
}

fn default_sample_width() -> u32 {
    DEFAULT_SAMPLE_WIDTH
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            sample_width: default_sample_width(),
        }
    }
}

/// Request size limits
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LimitsConfig {
    /// Maximum accepted image upload in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Maximum pixel count of the resampled working image
    #[serde(default = "default_max_pixels")]
    pub max_pixels: u64,
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_max_pixels() -> u64 {
    DEFAULT_MAX_PIXELS
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
            max_pixels: default_max_pixels(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults.
    ///
    /// `None` means no config file was given. A missing, unreadable or
    /// invalid file is logged and replaced by defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file set, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        default_count = config.extraction.default_count,
                        sample_width = config.extraction.sample_width,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML, clamping out-of-range values.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config.normalized())
    }

    /// Clamp values into their supported ranges.
    pub fn normalized(mut self) -> Self {
        let count = self.extraction.default_count;
        if !(MIN_COLORS..=MAX_COLORS).contains(&count) {
            let clamped = count.clamp(MIN_COLORS, MAX_COLORS);
            tracing::warn!(
                default_count = count,
                clamped,
                "extraction.default_count out of range"
            );
            self.extraction.default_count = clamped;
        }

        let width = self.extraction.sample_width;
        if !(1..=MAX_SAMPLE_WIDTH).contains(&width) {
            let clamped = width.clamp(1, MAX_SAMPLE_WIDTH);
            tracing::warn!(
                sample_width = width,
                clamped,
                "extraction.sample_width out of range"
            );
            self.extraction.sample_width = clamped;
        }

        if self.limits.max_upload_bytes == 0 {
            tracing::warn!("limits.max_upload_bytes is 0, using default");
            self.limits.max_upload_bytes = DEFAULT_MAX_UPLOAD_BYTES;
        }

        if self.limits.max_pixels == 0 {
            tracing::warn!("limits.max_pixels is 0, using default");
            self.limits.max_pixels = DEFAULT_MAX_PIXELS;
        }

        self
    }
}
