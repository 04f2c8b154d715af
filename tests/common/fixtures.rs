//! Test fixtures and constants.

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Colors that sit exactly on the quantization grid
pub mod colors {
    pub const BLUE: [u8; 4] = [0, 64, 224, 255];
    pub const ORANGE: [u8; 4] = [255, 160, 0, 255];
    pub const GREEN: [u8; 4] = [32, 192, 96, 255];
    pub const BLUE_HEX: &str = "#0040e0";
    pub const ORANGE_HEX: &str = "#ffa000";
    pub const GREEN_HEX: &str = "#20c060";
}

/// Encode an image as PNG
pub fn png(img: &RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes
}

/// Encode an image as JPEG (alpha dropped)
pub fn jpeg(img: &RgbaImage) -> Vec<u8> {
    let rgb = image::DynamicImage::ImageRgba8(img.clone()).into_rgb8();
    let mut bytes = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .expect("Failed to encode JPEG");
    bytes
}

/// Single-color image
pub fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

/// Image of vertical bands, widths in pixels
///
/// Band widths should be multiples of 4 so sampling hits each band
/// proportionally.
pub fn bands(height: u32, bands: &[(u32, [u8; 4])]) -> RgbaImage {
    let width: u32 = bands.iter().map(|(w, _)| w).sum();
    RgbaImage::from_fn(width, height, |x, _| {
        let mut edge = 0;
        for (w, color) in bands {
            edge += w;
            if x < edge {
                return Rgba(*color);
            }
        }
        Rgba(bands[bands.len() - 1].1)
    })
}

/// Blue / orange / green bands at 60% / 28% / 12%
pub fn three_band_png() -> Vec<u8> {
    png(&bands(
        40,
        &[
            (180, colors::BLUE),
            (84, colors::ORANGE),
            (36, colors::GREEN),
        ],
    ))
}
