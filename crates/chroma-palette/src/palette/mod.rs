//! Palette types and utilities
//!
//! This module provides the ordered [`Palette`] value and the error types
//! for hex parsing and palette validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, DEFAULT_COLORS, MAX_COLORS, MIN_COLORS};
