//! 8-bit RGB color type and hex string conversion
//!
//! `Rgb` is the working representation for extraction. Hex strings
//! (`#rrggbb`) are the external representation for every color that
//! enters or leaves the crate.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color as three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from floating-point channels in the 0..=255 range.
    ///
    /// Each channel is rounded to the nearest integer and clamped, so
    /// out-of-range values (e.g. a 256 quantization bucket) saturate.
    ///
    /// # Example
    /// ```
    /// use chroma_palette::Rgb;
    /// assert_eq!(Rgb::from_f32(256.0, 127.6, -3.0), Rgb::new(255, 128, 0));
    /// ```
    #[inline]
    pub fn from_f32(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: channel_to_u8(r),
            g: channel_to_u8(g),
            b: channel_to_u8(b),
        }
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Pack into a `0x00RRGGBB` integer.
    ///
    /// Used as the frequency table key during extraction.
    #[inline]
    pub fn packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Inverse of [`Rgb::packed`]. The top byte is ignored.
    #[inline]
    pub fn from_packed(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Format as a lowercase `#rrggbb` string.
    ///
    /// # Example
    /// ```
    /// use chroma_palette::Rgb;
    /// assert_eq!(Rgb::new(79, 140, 255).to_hex(), "#4f8cff");
    /// ```
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

#[inline]
fn channel_to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_bytes()
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB` and `RRGGBB`, case-insensitive, with surrounding
    /// whitespace trimmed. Shorthand (`#RGB`) is rejected: hex colors are
    /// always exactly six digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_palette::Rgb;
    ///
    /// let blue: Rgb = "#4F8CFF".parse().unwrap();
    /// assert_eq!(blue, Rgb::new(0x4f, 0x8c, 0xff));
    ///
    /// assert!("#fff".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        // Checked up front so the byte slicing below can never split a
        // multi-byte character and `from_str_radix` never sees a sign.
        if let Some((index, found)) = digits
            .char_indices()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(ParseColorError::InvalidCharacter { index, found });
        }
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }

        let r = u8::from_str_radix(&digits[0..2], 16)?;
        let g = u8::from_str_radix(&digits[2..4], 16)?;
        let b = u8::from_str_radix(&digits[4..6], 16)?;
        Ok(Self::new(r, g, b))
    }
}
