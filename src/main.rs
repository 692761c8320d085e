use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use canvas_snake::game::GameConfig;
use canvas_snake::modes::HumanMode;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "canvas_snake")]
#[command(version, about = "Snake on a tick-based canvas engine")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// Canvas width in pixels (multiple of 25)
    #[arg(long)]
    width: Option<i32>,

    /// Canvas height in pixels (multiple of 25)
    #[arg(long)]
    height: Option<i32>,

    /// Frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Seed for fruit placement
    #[arg(long)]
    seed: Option<u64>,

    /// JSON configuration file; explicit flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(width) = cli.width {
        config.canvas_width = width;
    }
    if let Some(height) = cli.height {
        config.canvas_height = height;
    }
    if let Some(fps) = cli.fps {
        config.fps = fps;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config
        .validate()
        .map_err(|err| anyhow!(err))
        .context("Invalid game configuration")?;
    Ok(config)
}

/// The terminal belongs to the game, so logs only go to a file
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let config = build_config(&cli)?;
    tracing::info!(?config, "configuration loaded");

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
        }
    }

    Ok(())
}
