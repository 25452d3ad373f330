//! Tracing subscriber setup.
//!
//! The filter comes from `VEGDASH_LOG`, then `RUST_LOG`, then defaults to `info`.
//! Text commands log to stderr. The TUI owns the terminal, so it only logs when a
//! log file is configured.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

pub const ENV_FILTER: &str = "VEGDASH_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// No subscriber; events are discarded.
    Off,
}

pub fn init(target: LogTarget<'_>) -> Result<(), AppError> {
    let filter = || {
        EnvFilter::try_from_env(ENV_FILTER)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            // A subscriber may already be installed (tests); keep that one.
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    AppError::new(2, format!("Failed to open log file '{}': {e}", path.display()))
                })?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
    }
    Ok(())
}
