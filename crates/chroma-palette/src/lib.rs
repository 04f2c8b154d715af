//! chroma-palette: dominant colors and color harmonies
//!
//! This library extracts a small set of representative colors from a raw
//! RGBA pixel buffer and derives harmonic variations from a base color.
//! It does no I/O: decoding images and presenting colors are the caller's
//! job.
//!
//! # Quick Start
//!
//! ```
//! use chroma_palette::{DominantColorExtractor, HarmonyKind, PixelBuffer};
//!
//! // 2x2 image: three dark pixels and one light one
//! let data = [
//!     10, 10, 10, 255, 12, 12, 12, 255,
//!     250, 250, 250, 255, 0, 0, 0, 255,
//! ];
//! let buffer = PixelBuffer::new(&data, 2, 2).unwrap();
//!
//! let palette = DominantColorExtractor::new()
//!     .sample_stride(1)
//!     .extract(&buffer, 2)
//!     .unwrap();
//! assert_eq!(palette.hex_strings(), vec!["#000000", "#ffffff"]);
//!
//! let harmony = palette.harmonize(HarmonyKind::Monochrome);
//! assert_eq!(harmony.len(), 5);
//! ```
//!
//! # String API
//!
//! Hex strings (`#rrggbb`, lowercase) are the external color format:
//!
//! ```
//! use chroma_palette::{extract_dominant_colors, generate_harmony, HarmonyKind};
//!
//! let data = [0u8, 0, 255, 255];
//! let colors = extract_dominant_colors(&data, 1, 1, 5).unwrap();
//! assert_eq!(colors, vec!["#0000ff"]);
//!
//! let harmony = generate_harmony(&colors[0], HarmonyKind::Complementary).unwrap();
//! assert_eq!(harmony.len(), 5);
//! ```
//!
//! # Color Spaces
//!
//! - [`Rgb`]: 8-bit channels, used for extraction and I/O
//! - [`Hsl`]: hue in degrees, saturation/lightness in percent, used for
//!   harmonies
//!
//! # Extraction
//!
//! Every 4th pixel ([`SAMPLE_STRIDE`]) of the flattened buffer is sampled,
//! each channel is rounded to the nearest multiple of 32
//! ([`QUANTIZATION_BUCKET`]) and the snapped colors are ranked by count.
//! Only the stride can be overridden, via [`DominantColorExtractor::sample_stride`].
//!
//! Equal counts rank in first-seen order. Callers should not depend on the
//! order of ties beyond that.
//!
//! # Harmonies
//!
//! See [`harmony`] for the five-member tables of the four
//! [`HarmonyKind`]s.

pub mod api;
pub mod color;
pub mod extract;
pub mod harmony;
pub mod palette;


pub use api::ChromaError;
pub use color::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, Hsl, Rgb};
pub use extract::{
    extract_dominant_colors, quantize_channel, DominantColorExtractor, ExtractError, PixelBuffer,
    QUANTIZATION_BUCKET, SAMPLE_STRIDE,
};
pub use harmony::{generate_harmony, HarmonyKind, ParseHarmonyKindError, HARMONY_SIZE};
pub use palette::{
    Palette, PaletteError, ParseColorError, DEFAULT_COLORS, MAX_COLORS, MIN_COLORS,
};
