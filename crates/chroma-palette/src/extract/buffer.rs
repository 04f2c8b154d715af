//! Borrowed RGBA8 pixel buffer.

use super::error::ExtractError;
use crate::color::Rgb;

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A read-only view of row-major RGBA8 pixels.
///
/// The caller owns the bytes (decoded image, canvas readback, ...); the
/// extractor only reads them. Alpha is carried but ignored.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap an RGBA8 byte slice.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::EmptyBuffer`] if either dimension is zero or
    ///   `data` is empty
    /// - [`ExtractError::DimensionMismatch`] if `data.len()` is not
    ///   `width * height * 4`
    ///
    /// # Example
    ///
    /// ```
    /// use chroma_palette::PixelBuffer;
    ///
    /// let data = [255u8, 0, 0, 255, 0, 0, 255, 255];
    /// let buffer = PixelBuffer::new(&data, 2, 1).unwrap();
    /// assert_eq!(buffer.pixel_count(), 2);
    /// ```
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, ExtractError> {
        if width == 0 || height == 0 || data.is_empty() {
            return Err(ExtractError::EmptyBuffer);
        }
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(ExtractError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Color of the pixel at flattened index `idx` (alpha dropped).
    #[inline]
    pub fn pixel(&self, idx: usize) -> Option<Rgb> {
        let start = idx.checked_mul(CHANNELS)?;
        let px = self.data.get(start..start.checked_add(CHANNELS)?)?;
        Some(Rgb::new(px[0], px[1], px[2]))
    }

    /// Every `stride`-th pixel along the flattened buffer, starting at 0.
    ///
    /// A stride of 0 is treated as 1.
    pub fn sampled(&self, stride: usize) -> impl Iterator<Item = Rgb> + 'a {
        self.data
            .chunks_exact(CHANNELS)
            .step_by(stride.max(1))
            .map(|px| Rgb::new(px[0], px[1], px[2]))
    }
}
