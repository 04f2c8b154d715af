//! Color types and conversion utilities
//!
//! Three representations are used across the crate:
//!
//! - **hex** (`#rrggbb`): the external form of every color in and out
//! - [`Rgb`]: 8-bit triple, the working form for extraction
//! - [`Hsl`]: hue/saturation/lightness, the working form for harmonies
//!
//! The free functions below are thin wrappers over the `From`/`FromStr`
//! impls on the types, for callers that work with plain numbers.
//!
//! # Example
//!
//! ```
//! use chroma_palette::{hex_to_rgb, rgb_to_hsl, hsl_to_rgb, rgb_to_hex};
//!
//! let rgb = hex_to_rgb("#4f8cff").unwrap();
//! let hsl = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
//! let back = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
//! assert_eq!(rgb_to_hex(back.r as f32, back.g as f32, back.b as f32), "#4f8cff");
//! ```

mod hsl;
mod rgb;

pub use hsl::{wrap_hue, Hsl};
pub use rgb::Rgb;

use crate::palette::ParseColorError;

/// Format channels as `#rrggbb`.
///
/// Channels are clamped to `[0, 255]` and rounded to the nearest integer.
pub fn rgb_to_hex(r: f32, g: f32, b: f32) -> String {
    Rgb::from_f32(r, g, b).to_hex()
}

/// Parse a `#rrggbb` (or `rrggbb`) string.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ParseColorError> {
    hex.parse()
}

/// Convert 8-bit channels to HSL (degrees, percent, percent).
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    Hsl::from(Rgb::new(r, g, b))
}

/// Convert HSL (degrees, percent, percent) to 8-bit channels.
///
/// Hue wraps modulo 360; saturation and lightness are clamped.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    Rgb::from(Hsl::new(h, s, l))
}
