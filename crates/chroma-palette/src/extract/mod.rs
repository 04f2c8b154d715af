//! Dominant-color extraction
//!
//! The extractor walks an RGBA8 buffer with a fixed stride, snaps each
//! sampled pixel to a 32-step grid per channel, counts the snapped colors
//! and returns the most frequent ones. Ranking is approximate: striding
//! skips pixels, and quantization merges anti-aliasing noise and gradients
//! into shared buckets.

mod buffer;
mod error;
mod extractor;
mod quantize;

pub use buffer::{PixelBuffer, CHANNELS};
pub use error::ExtractError;
pub use extractor::{extract_dominant_colors, DominantColorExtractor, SAMPLE_STRIDE};
pub use quantize::{quantize, quantize_channel, FrequencyTable, QUANTIZATION_BUCKET};
