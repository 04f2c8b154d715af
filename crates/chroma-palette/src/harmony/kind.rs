//! Harmony kinds.

use std::fmt;
use std::str::FromStr;

/// Rule for deriving five related colors from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyKind {
    /// Neighbouring hues: base +/- 15 and +/- 30 degrees
    Analogous,
    /// Base and its opposite (180 degrees) with lightness/saturation variants
    Complementary,
    /// Three hues 120 degrees apart, plus two variants
    Triadic,
    /// Single hue, five lightness steps
    Monochrome,
}

impl HarmonyKind {
    /// All harmony kinds, in presentation order.
    pub const ALL: [HarmonyKind; 4] = [
        Self::Analogous,
        Self::Complementary,
        Self::Triadic,
        Self::Monochrome,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Monochrome => "monochrome",
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a harmony kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHarmonyKindError {
    name: String,
}

impl ParseHarmonyKindError {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseHarmonyKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown harmony kind {:?} (expected analogous, complementary, triadic or monochrome)",
            self.name
        )
    }
}

impl std::error::Error for ParseHarmonyKindError {}

impl FromStr for HarmonyKind {
    type Err = ParseHarmonyKindError;

    /// Parse a kind name, case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseHarmonyKindError {
                name: trimmed.to_string(),
            })
    }
}
