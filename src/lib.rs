//! Hueprint - dominant colors and color harmonies
//!
//! HTTP server and CLI around the `chroma-palette` library.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
