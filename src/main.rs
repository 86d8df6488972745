#![forbid(unsafe_code)]

mod autoplay;
mod carousel;
mod catalog;
mod commands;
mod constants;
mod gestures;
mod gui;
mod overlay;
mod project;
mod sections;
mod settings;
mod text;
mod typewriter;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use catalog::Catalog;
use settings::Settings;

/// Desktop portfolio showcase: project carousel with a detail overlay
#[derive(Debug, Parser)]
#[command(name = "folio-deck", version)]
struct Cli {
    /// Path to the project catalog
    #[arg(long, default_value = "projects.json")]
    data: PathBuf,

    /// Auto-advance the carousel
    #[arg(long)]
    autoplay: bool,

    /// Auto-advance interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,
}

fn main() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let mut settings = Settings::load();
    if cli.autoplay {
        settings.autoplay = true;
    }
    if let Some(interval_ms) = cli.interval_ms {
        settings.autoplay_interval_ms = interval_ms;
        settings.validate_and_clamp();
    }
    info!(
        autoplay = settings.autoplay,
        interval_ms = settings.autoplay_interval_ms,
        "settings resolved"
    );

    // Never fatal: a failed load substitutes the one-record fallback and the
    // window comes up with an error banner
    let catalog = Catalog::load(&cli.data);
    if catalog.is_empty() {
        warn!("catalog has no projects, the carousel will be inert");
    }

    gui::run(catalog, settings, cli.data)
}
