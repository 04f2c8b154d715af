//! Image decoding and resampling ahead of color extraction.

use image::{imageops::FilterType, RgbaImage};
use std::path::Path;

use crate::error::ImageError;

/// Decode encoded image bytes into RGBA8, resampled to `sample_width`.
///
/// The format is sniffed from the content. Aspect ratio is kept; the
/// height is rounded and never drops below one row. The resampled image
/// may hold at most `max_pixels` pixels.
pub fn decode_rgba(
    bytes: &[u8],
    sample_width: u32,
    max_pixels: u64,
) -> Result<RgbaImage, ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 {
        return Err(ImageError::Empty { width, height });
    }

    let (target_width, target_height) = working_size(width, height, sample_width);
    let pixels = u64::from(target_width) * u64::from(target_height);
    if pixels > max_pixels {
        return Err(ImageError::TooLarge {
            width: target_width,
            height: target_height,
            max_pixels,
        });
    }

    let rgba = decoded.into_rgba8();
    Ok(resample(rgba, target_width, target_height))
}

/// Read and decode an image file.
pub fn load_file(
    path: &Path,
    sample_width: u32,
    max_pixels: u64,
) -> Result<RgbaImage, ImageError> {
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), size = bytes.len(), "Read image file");
    decode_rgba(&bytes, sample_width, max_pixels)
}

/// Dimensions an image of `width` x `height` is resampled to.
pub fn working_size(width: u32, height: u32, sample_width: u32) -> (u32, u32) {
    let target_width = sample_width.max(1);
    if width == target_width {
        return (width, height);
    }
    (target_width, scaled_height(width, height, target_width))
}

/// Height that keeps the aspect ratio at `target_width`.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 {
        return 1;
    }
    let scaled = (u64::from(height) * u64::from(target_width) + u64::from(width) / 2)
        / u64::from(width);
    scaled.clamp(1, u64::from(u32::MAX)) as u32
}

fn resample(rgba: RgbaImage, target_width: u32, target_height: u32) -> RgbaImage {
    if rgba.dimensions() == (target_width, target_height) {
        return rgba;
    }

    tracing::trace!(
        from_width = rgba.width(),
        from_height = rgba.height(),
        to_width = target_width,
        to_height = target_height,
        "Resampling image"
    );
    image::imageops::resize(&rgba, target_width, target_height, FilterType::Triangle)
}
