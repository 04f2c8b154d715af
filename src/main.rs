use anyhow::Context;
use chroma_palette::{HarmonyKind, Palette};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hueprint::models::{AppConfig, ExportFormat};
use hueprint::server;
use hueprint::services::PaletteService;

#[derive(Parser)]
#[command(name = "hueprint")]
#[command(about = "Hueprint - dominant color extraction and color harmonies")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Extract the dominant colors of an image file
    Extract {
        /// Image file (PNG, JPEG, GIF, WebP, ...)
        image: PathBuf,

        /// Number of colors (2-10, default from config)
        #[arg(short, long)]
        count: Option<usize>,

        /// Output format: json, css or text
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,
    },
    /// Generate a five-color harmony from a base color
    Harmony {
        /// Base color as six hex digits (e.g. "#4f8cff")
        base: String,

        /// analogous, complementary, triadic or monochrome
        #[arg(short, long, default_value = "complementary")]
        kind: HarmonyKind,

        /// Output format: json, css or text
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Extract {
            image,
            count,
            format,
        }) => run_extract_command(&image, count, format),
        Some(Commands::Harmony { base, kind, format }) => {
            run_harmony_command(&base, kind, format)
        }
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn config_file() -> Option<PathBuf> {
    std::env::var("CONFIG_FILE").ok().map(PathBuf::from)
}

/// Minimal logging for CLI
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hueprint=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn print_palette(palette: &Palette, format: ExportFormat) -> anyhow::Result<()> {
    let rendered = format
        .render(palette)
        .context("Failed to render palette")?;
    println!("{rendered}");
    Ok(())
}

/// Extract colors from an image file (no server needed)
fn run_extract_command(
    image: &Path,
    count: Option<usize>,
    format: ExportFormat,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::load(config_file().as_deref());
    let service = PaletteService::new(config.into());
    let palette = service
        .extract_from_file(image, count)
        .with_context(|| format!("Failed to extract colors from {}", image.display()))?;

    print_palette(&palette, format)
}

/// Print a harmony of a base color
fn run_harmony_command(base: &str, kind: HarmonyKind, format: ExportFormat) -> anyhow::Result<()> {
    init_cli_tracing();

    let service = PaletteService::new(AppConfig::default().into());
    let (_, _, palette) = service.harmony(base, kind.as_str())?;

    print_palette(&palette, format)
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    // Header
    println!("Hueprint v{VERSION}");
    println!("Dominant color extraction and color harmonies\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Config source
    let config_source = match config_file {
        Some(ref path) if PathBuf::from(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    let config = AppConfig::load(config_file.map(PathBuf::from).as_deref());
    println!("\nConfiguration: {config_source}");
    println!("  default_count    = {}", config.extraction.default_count);
    println!("  sample_width     = {}", config.extraction.sample_width);
    println!("  max_upload_bytes = {}", config.limits.max_upload_bytes);
    println!("  max_pixels       = {}", config.limits.max_pixels);

    // Commands section
    println!("\nCommands:");
    println!("  hueprint serve     Start the HTTP server");
    println!("  hueprint extract   Extract the dominant colors of an image");
    println!("  hueprint harmony   Generate a color harmony");
    println!("\nRun 'hueprint --help' for more details.");
}

async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hueprint=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_file = config_file();
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!(
        config = %config_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "defaults".to_string()),
        "Configuration source"
    );

    let config = AppConfig::load(config_file.as_deref());
    let state = server::create_app_state(config);
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "Hueprint server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
