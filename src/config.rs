//! Command-line configuration and logging setup

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Classic snake in your terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "termsnake")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Seed for food placement (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// File that receives log output; the screen belongs to the game
    #[arg(long, default_value = "termsnake.log")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is not set (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the end-of-game summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Send tracing output to `path`, truncating any previous log.
pub fn init_logging(path: &Path, level: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level {level:?}"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}
