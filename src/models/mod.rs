pub mod config;
pub mod export;

pub use config::{AppConfig, ExtractionConfig, LimitsConfig};
pub use export::ExportFormat;
