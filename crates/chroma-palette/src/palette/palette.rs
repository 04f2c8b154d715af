//! Ordered palette of colors.
//!
//! A `Palette` is what both the extractor and the harmony generator hand
//! back to the caller. Order is significant: the first entry is the base
//! color for a follow-up harmony.

use std::fmt;

use super::error::PaletteError;
use crate::color::Rgb;
use crate::harmony::{generate_harmony_rgb, HarmonyKind};

/// Smallest palette size offered to users.
pub const MIN_COLORS: usize = 2;

/// Largest palette size offered to users.
pub const MAX_COLORS: usize = 10;

/// Palette size used when the caller does not pick one.
pub const DEFAULT_COLORS: usize = 5;

/// An ordered, non-empty sequence of colors.
///
/// # Example
///
/// ```
/// use chroma_palette::{HarmonyKind, Palette};
///
/// let palette = Palette::from_hex(&["#4f8cff", "#ffb347"]).unwrap();
/// assert_eq!(palette.base().to_hex(), "#4f8cff");
///
/// let triadic = palette.harmonize(HarmonyKind::Triadic);
/// assert_eq!(triadic.len(), 5);
/// assert_eq!(triadic.base(), palette.base());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from colors, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: Vec<Rgb>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Create a palette from hex strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] for an empty slice, or
    /// [`PaletteError::ParseColor`] naming the first malformed entry.
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .enumerate()
            .map(|(index, s)| {
                s.as_ref()
                    .parse::<Rgb>()
                    .map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The first color, used as the base for harmonies.
    #[inline]
    pub fn base(&self) -> Rgb {
        self.colors[0]
    }

    /// Color at `idx`, if any.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Rgb> {
        self.colors.get(idx).copied()
    }

    /// Iterate over the colors in order.
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().copied()
    }

    /// Colors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Rgb] {
        &self.colors
    }

    /// Consume the palette, returning its colors.
    pub fn into_vec(self) -> Vec<Rgb> {
        self.colors
    }

    /// `#rrggbb` strings in palette order.
    pub fn hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }

    /// Derive a five-color harmony from the base color.
    pub fn harmonize(&self, kind: HarmonyKind) -> Palette {
        Palette {
            colors: generate_harmony_rgb(self.base(), kind).to_vec(),
        }
    }

    /// Render as CSS custom properties, one per line.
    ///
    /// # Example
    ///
    /// ```
    /// use chroma_palette::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
    /// assert_eq!(
    ///     palette.to_css_variables(),
    ///     "--color-1: #000000;\n--color-2: #ffffff;"
    /// );
    /// ```
    pub fn to_css_variables(&self) -> String {
        self.colors
            .iter()
            .enumerate()
            .map(|(i, c)| format!("--color-{}: {};", i + 1, c))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Palette {
    /// Space-separated hex strings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgb;
    type IntoIter = std::slice::Iter<'a, Rgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
