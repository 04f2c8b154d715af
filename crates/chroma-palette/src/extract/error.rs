//! Error type for dominant-color extraction.

use std::fmt;

/// Invalid input to the extractor.
///
/// Extraction is a single deterministic pass, so every error is a
/// precondition violation on the caller's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The pixel buffer has no pixels (zero width, zero height or no data)
    EmptyBuffer,
    /// The byte length does not match `width * height * 4`
    DimensionMismatch {
        /// Expected byte length
        expected: usize,
        /// Actual byte length
        actual: usize,
    },
    /// A palette of zero colors was requested
    ZeroCount,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::EmptyBuffer => write!(f, "pixel buffer is empty"),
            ExtractError::DimensionMismatch { expected, actual } => write!(
                f,
                "pixel buffer has {} bytes, expected {} (width * height * 4)",
                actual, expected
            ),
            ExtractError::ZeroCount => write!(f, "requested color count must be at least 1"),
        }
    }
}

impl std::error::Error for ExtractError {}
