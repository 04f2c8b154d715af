//! Dominant-color extraction: sample, quantize, count, rank.

use super::buffer::PixelBuffer;
use super::error::ExtractError;
use super::quantize::{quantize, FrequencyTable};
use crate::color::Rgb;
use crate::palette::Palette;

/// Default sampling stride: every 4th pixel of the flattened buffer.
pub const SAMPLE_STRIDE: usize = 4;

/// Configurable dominant-color extractor.
///
/// Defaults to stride 4 with a 32-step bucket. Only the stride can be
/// changed; `stride = 1` samples every pixel, which small images need.
///
/// # Example
///
/// ```
/// use chroma_palette::{DominantColorExtractor, PixelBuffer};
///
/// let data: Vec<u8> = [[250, 10, 10, 255]; 8].concat();
/// let buffer = PixelBuffer::new(&data, 4, 2).unwrap();
///
/// let colors = DominantColorExtractor::new().extract(&buffer, 5).unwrap();
/// assert_eq!(colors.hex_strings(), vec!["#ff0000"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DominantColorExtractor {
    stride: usize,
}

impl Default for DominantColorExtractor {
    fn default() -> Self {
        Self {
            stride: SAMPLE_STRIDE,
        }
    }
}

impl DominantColorExtractor {
    /// Extractor with the default stride.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sampling stride in pixels. Values below 1 become 1.
    pub fn sample_stride(mut self, stride: usize) -> Self {
        self.stride = stride.max(1);
        self
    }

    /// The configured stride.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Count quantized colors over the sampled pixels.
    pub fn frequencies(&self, buffer: &PixelBuffer<'_>) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for color in buffer.sampled(self.stride) {
            table.record(quantize(color));
        }
        table
    }

    /// The `count` most frequent quantized colors, most frequent first.
    ///
    /// Returns fewer than `count` colors when the image has fewer distinct
    /// quantized colors; the result is never padded.
    ///
    /// # Errors
    ///
    /// [`ExtractError::ZeroCount`] if `count` is 0.
    pub fn extract(&self, buffer: &PixelBuffer<'_>, count: usize) -> Result<Palette, ExtractError> {
        let ranked = self.ranked(buffer, count)?;
        // The first sampled pixel always lands in the table, so `ranked`
        // is non-empty for any valid buffer.
        Palette::new(ranked.into_iter().map(|(color, _)| color).collect())
            .map_err(|_| ExtractError::EmptyBuffer)
    }

    /// Like [`extract`](Self::extract) but keeps the sample counts.
    pub fn ranked(
        &self,
        buffer: &PixelBuffer<'_>,
        count: usize,
    ) -> Result<Vec<(Rgb, u32)>, ExtractError> {
        if count == 0 {
            return Err(ExtractError::ZeroCount);
        }
        let mut ranked = self.frequencies(buffer).ranked();
        ranked.truncate(count);
        Ok(ranked)
    }
}

/// Extract the `count` dominant colors of an RGBA8 buffer as `#rrggbb`
/// strings, using the default stride.
///
/// # Errors
///
/// - [`ExtractError::EmptyBuffer`] / [`ExtractError::DimensionMismatch`]
///   for a malformed buffer
/// - [`ExtractError::ZeroCount`] if `count` is 0
pub fn extract_dominant_colors(
    rgba: &[u8],
    width: u32,
    height: u32,
    count: usize,
) -> Result<Vec<String>, ExtractError> {
    let buffer = PixelBuffer::new(rgba, width, height)?;
    let palette = DominantColorExtractor::new().extract(&buffer, count)?;
    Ok(palette.hex_strings())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(pixels: &[(u8, u8, u8)]) -> Vec<u8> {
        pixels.iter().flat_map(|&(r, g, b)| [r, g, b, 255]).collect()
    }

    #[test]
    fn test_most_frequent_first() {
        let mut pixels = vec![(200, 30, 30); 3];
        pixels.extend(vec![(20, 20, 200); 5]);
        pixels.push((0, 250, 0));
        let data = rgba(&pixels);
        let buffer = PixelBuffer::new(&data, 9, 1).unwrap();

        let ranked = DominantColorExtractor::new()
            .sample_stride(1)
            .ranked(&buffer, 10)
            .unwrap();

        assert_eq!(
            ranked,
            vec![
                (Rgb::new(32, 32, 192), 5),
                (Rgb::new(192, 32, 32), 3),
                (Rgb::new(0, 255, 0), 1),
            ]
        );
    }

    #[test]
    fn test_truncates_to_count() {
        let data = rgba(&[(0, 0, 0), (0, 0, 0), (255, 255, 255), (128, 0, 0)]);
        let buffer = PixelBuffer::new(&data, 2, 2).unwrap();
        let palette = DominantColorExtractor::new()
            .sample_stride(1)
            .extract(&buffer, 1)
            .unwrap();
        assert_eq!(palette.hex_strings(), vec!["#000000"]);
    }

    #[test]
    fn test_default_stride_skips_pixels() {
        // Only indices 0 and 4 are sampled with the default stride
        let data = rgba(&[
            (255, 0, 0),
            (0, 255, 0),
            (0, 255, 0),
            (0, 255, 0),
            (0, 0, 255),
            (0, 255, 0),
        ]);
        let buffer = PixelBuffer::new(&data, 6, 1).unwrap();
        let palette = DominantColorExtractor::new().extract(&buffer, 5).unwrap();
        assert_eq!(palette.hex_strings(), vec!["#ff0000", "#0000ff"]);
    }

    #[test]
    fn test_zero_stride_is_clamped() {
        assert_eq!(DominantColorExtractor::new().sample_stride(0).stride(), 1);
        assert_eq!(DominantColorExtractor::new().stride(), SAMPLE_STRIDE);
    }

    #[test]
    fn test_zero_count_rejected() {
        let data = rgba(&[(1, 2, 3)]);
        let buffer = PixelBuffer::new(&data, 1, 1).unwrap();
        assert_eq!(
            DominantColorExtractor::new().extract(&buffer, 0).unwrap_err(),
            ExtractError::ZeroCount
        );
    }

    #[test]
    fn test_extract_dominant_colors_validates_buffer() {
        assert_eq!(
            extract_dominant_colors(&[], 0, 0, 5).unwrap_err(),
            ExtractError::EmptyBuffer
        );
        assert!(matches!(
            extract_dominant_colors(&[0; 8], 3, 1, 5),
            Err(ExtractError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_alpha_is_ignored() {
        let data = [10u8, 10, 10, 0, 10, 10, 10, 255];
        let buffer = PixelBuffer::new(&data, 2, 1).unwrap();
        let ranked = DominantColorExtractor::new()
            .sample_stride(1)
            .ranked(&buffer, 5)
            .unwrap();
        assert_eq!(ranked, vec![(Rgb::new(0, 0, 0), 2)]);
    }
}
