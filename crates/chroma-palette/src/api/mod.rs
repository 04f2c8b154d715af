//! Public API for the chroma-palette crate.
//!
//! This module provides the unified [`ChromaError`] type.

mod error;

pub use error::ChromaError;
