//! Color harmony generation
//!
//! Each [`HarmonyKind`] is a fixed table of five HSL transforms applied to
//! the base color. Hue offsets wrap modulo 360. Lightness and saturation
//! shifts are bounded (e.g. complementary never goes darker than L=20) so
//! that no member collapses to pure black, pure white or gray.
//!
//! | Kind | Members (relative to base h, s, l) |
//! |------|------------------------------------|
//! | analogous | h-30, h, h+30, h+15, h-15 |
//! | complementary | base, h+180, l-20 (min 20), h+180 & l+20 (max 80), s-20 (min 30) |
//! | triadic | base, h+120, h+240, l-15 (min 20), h+120 & s-10 (min 30) |
//! | monochrome | l-30 (min 15), l-15 (min 25), base, l+15 (max 85), l+30 (max 95) |

mod kind;

pub use kind::{HarmonyKind, ParseHarmonyKindError};

use crate::api::ChromaError;
use crate::color::{Hsl, Rgb};

/// Number of colors in every harmony.
pub const HARMONY_SIZE: usize = 5;

/// Apply a harmony table to a base color in HSL space.
pub fn harmony_hsl(base: Hsl, kind: HarmonyKind) -> [Hsl; HARMONY_SIZE] {
    let Hsl { s, l, .. } = base;
    match kind {
        HarmonyKind::Analogous => [
            base.rotate(-30.0),
            base,
            base.rotate(30.0),
            base.rotate(15.0),
            base.rotate(-15.0),
        ],
        HarmonyKind::Complementary => [
            base,
            base.rotate(180.0),
            base.with_lightness((l - 20.0).max(20.0)),
            base.rotate(180.0).with_lightness((l + 20.0).min(80.0)),
            base.with_saturation((s - 20.0).max(30.0)),
        ],
        HarmonyKind::Triadic => [
            base,
            base.rotate(120.0),
            base.rotate(240.0),
            base.with_lightness((l - 15.0).max(20.0)),
            base.rotate(120.0).with_saturation((s - 10.0).max(30.0)),
        ],
        HarmonyKind::Monochrome => [
            base.with_lightness((l - 30.0).max(15.0)),
            base.with_lightness((l - 15.0).max(25.0)),
            base,
            base.with_lightness((l + 15.0).min(85.0)),
            base.with_lightness((l + 30.0).min(95.0)),
        ],
    }
}

/// Harmony of an RGB base color.
pub fn generate_harmony_rgb(base: Rgb, kind: HarmonyKind) -> [Rgb; HARMONY_SIZE] {
    harmony_hsl(Hsl::from(base), kind).map(Rgb::from)
}

/// Harmony of a hex base color, as five `#rrggbb` strings.
///
/// # Errors
///
/// [`ChromaError::ParseColor`] if `base_hex` is not a six-digit hex color.
///
/// # Example
///
/// ```
/// use chroma_palette::{generate_harmony, HarmonyKind};
///
/// let colors = generate_harmony("#4f8cff", HarmonyKind::Monochrome).unwrap();
/// assert_eq!(colors.len(), 5);
/// assert_eq!(colors[2], "#4f8cff");
/// ```
pub fn generate_harmony(base_hex: &str, kind: HarmonyKind) -> Result<Vec<String>, ChromaError> {
    let base: Rgb = base_hex.parse()?;
    Ok(generate_harmony_rgb(base, kind)
        .iter()
        .map(|c| c.to_hex())
        .collect())
}
