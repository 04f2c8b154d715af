use chroma_palette::Palette;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Output format for a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed JSON array of hex strings
    #[default]
    Json,
    /// CSS custom properties (`--color-1: #rrggbb;`)
    Css,
    /// One hex string per line
    #[serde(alias = "txt")]
    Text,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Css => "css",
            ExportFormat::Text => "text",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Css => "text/css; charset=utf-8",
            ExportFormat::Text => "text/plain; charset=utf-8",
        }
    }

    /// Download name, only JSON is served as an attachment
    pub fn attachment_name(&self) -> Option<&'static str> {
        match self {
            ExportFormat::Json => Some("color-palette.json"),
            ExportFormat::Css | ExportFormat::Text => None,
        }
    }

    /// Render a palette in this format
    pub fn render(&self, palette: &Palette) -> serde_json::Result<String> {
        match self {
            ExportFormat::Json => serde_json::to_string_pretty(&palette.hex_strings()),
            ExportFormat::Css => Ok(palette.to_css_variables()),
            ExportFormat::Text => Ok(palette.hex_strings().join("\n")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "css" => Ok(ExportFormat::Css),
            "text" | "txt" => Ok(ExportFormat::Text),
            other => Err(format!(
                "unknown export format {other:?} (expected json, css or text)"
            )),
        }
    }
}
