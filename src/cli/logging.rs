//! Logging initialization

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Initialize logging based on debug flag
///
/// Logs go to a temp file so the TUI owns stdout/stderr. Returns the log file
/// path if debug logging is enabled.
pub fn init_logging(debug: bool) -> Result<Option<PathBuf>> {
    if !debug {
        // No logging by default (silent operation)
        return Ok(None);
    }

    let temp_file = tempfile::Builder::new()
        .prefix("gauntlet-")
        .suffix(".log")
        .tempfile()
        .context("Failed to create log file")?;

    // Keep the file on disk after we drop the handle
    let (file, path) = temp_file
        .keep()
        .context("Failed to persist log file")?;

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_ansi(false) // No ANSI codes in log file
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Ok(Some(path))
}
