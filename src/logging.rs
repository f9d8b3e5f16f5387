//! File logging for the TUI
//!
//! The terminal is owned by ratatui while the app runs, so all tracing output
//! goes to `<data dir>/logs/concierge.log` with daily rotation.
//!
//! Configure via RUST_LOG environment variable, e.g.
//! `RUST_LOG=concierge::app=debug`. Without it the `log_level` from
//! config.toml applies (default `info`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_FILE: &str = "concierge.log";

/// Initialize the file subscriber
pub fn init(log_dir: &Path, default_level: &str) -> Result<()> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE);
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .context("tracing subscriber already installed")?;

    Ok(())
}
