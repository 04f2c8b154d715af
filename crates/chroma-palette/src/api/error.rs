//! Unified error type for the chroma-palette public API.
//!
//! [`ChromaError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::extract::ExtractError;
use crate::harmony::ParseHarmonyKindError;
use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Unified error type for the chroma-palette public API.
///
/// Every variant is an invalid-input condition: the crate performs no I/O
/// and has no transient failures.
///
/// # Example
///
/// ```
/// use chroma_palette::{ChromaError, HarmonyKind, Palette};
///
/// fn triadic(base: &str, kind: &str) -> Result<Palette, ChromaError> {
///     let kind: HarmonyKind = kind.parse()?;
///     Ok(Palette::from_hex(&[base])?.harmonize(kind))
/// }
///
/// assert!(triadic("#4f8cff", "triadic").is_ok());
/// assert!(triadic("#4f8cff", "tetradic").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ChromaError {
    /// Malformed hex color
    ParseColor(ParseColorError),
    /// Palette validation error
    Palette(PaletteError),
    /// Invalid pixel buffer or count
    Extract(ExtractError),
    /// Unknown harmony kind name
    HarmonyKind(ParseHarmonyKindError),
}

impl fmt::Display for ChromaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChromaError::ParseColor(err) => write!(f, "color parse error: {}", err),
            ChromaError::Palette(err) => write!(f, "palette error: {}", err),
            ChromaError::Extract(err) => write!(f, "extraction error: {}", err),
            ChromaError::HarmonyKind(err) => write!(f, "harmony error: {}", err),
        }
    }
}

impl std::error::Error for ChromaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChromaError::ParseColor(err) => Some(err),
            ChromaError::Palette(err) => Some(err),
            ChromaError::Extract(err) => Some(err),
            ChromaError::HarmonyKind(err) => Some(err),
        }
    }
}

impl From<ParseColorError> for ChromaError {
    fn from(err: ParseColorError) -> Self {
        ChromaError::ParseColor(err)
    }
}

impl From<PaletteError> for ChromaError {
    fn from(err: PaletteError) -> Self {
        ChromaError::Palette(err)
    }
}

impl From<ExtractError> for ChromaError {
    fn from(err: ExtractError) -> Self {
        ChromaError::Extract(err)
    }
}

impl From<ParseHarmonyKindError> for ChromaError {
    fn from(err: ParseHarmonyKindError) -> Self {
        ChromaError::HarmonyKind(err)
    }
}
