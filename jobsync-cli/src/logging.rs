//! Tracing setup for the binary.
//!
//! Events below WARN go to stdout, WARN and ERROR to stderr. When a log path
//! is given, every event is also appended to it without ANSI colors, after
//! rotating it if it grew too large. `RUST_LOG` filters both sinks.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::log_rotation::{rotate_if_needed, MAX_LOG_BYTES, MAX_ROTATED_FILES};

pub fn init(log_path: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr.with_max_level(Level::WARN).or_else(std::io::stdout));

    let file = match log_path {
        Some(path) => {
            if let Err(err) = rotate_if_needed(path, MAX_LOG_BYTES, MAX_ROTATED_FILES) {
                eprintln!("warning: could not rotate {}: {err}", path.display());
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open run log {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .context("failed to install the tracing subscriber")
}
