//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when a string is not exactly six hexadecimal digits,
/// optionally prefixed with `#`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Wrong number of hex digits (after stripping '#'); carries the length found
    InvalidLength(usize),
    /// A character that is not a hexadecimal digit
    InvalidCharacter {
        /// Byte offset of the character, after stripping '#'
        index: usize,
        /// The offending character
        found: char,
    },
    /// Integer parsing failed
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength(len) => {
                write!(
                    f,
                    "invalid hex color length {} (expected 6 digits)",
                    len
                )
            }
            ParseColorError::InvalidCharacter { index, found } => {
                write!(f, "invalid hex character {:?} at position {}", found, index)
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex value: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for palette construction.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No colors provided
    EmptyPalette,
    /// Invalid hex color string at the given position
    ParseColor {
        /// Index of the offending entry
        index: usize,
        /// Underlying parse failure
        source: ParseColorError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::ParseColor { index, source } => {
                write!(f, "invalid color at index {}: {}", index, source)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ParseColorError::InvalidLength(3).to_string(),
            "invalid hex color length 3 (expected 6 digits)"
        );
        assert_eq!(
            ParseColorError::InvalidCharacter { index: 2, found: 'z' }.to_string(),
            "invalid hex character 'z' at position 2"
        );
        assert_eq!(PaletteError::EmptyPalette.to_string(), "palette cannot be empty");
    }

    #[test]
    fn test_palette_error_source_chain() {
        let err = PaletteError::ParseColor {
            index: 1,
            source: ParseColorError::InvalidLength(4),
        };
        assert_eq!(
            err.to_string(),
            "invalid color at index 1: invalid hex color length 4 (expected 6 digits)"
        );
        assert!(err.source().is_some());
        assert!(PaletteError::EmptyPalette.source().is_none());
    }
}
