//! Tracing setup.
//!
//! Stdout carries the UI, so log output only ever goes to the file named by
//! `TAPE_PROMPT_LOG_FILE`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;
use crate::error::Result;

pub const DEFAULT_FILTER: &str = "tape_prompt=info";

/// Keeps the background log writer alive. Dropping it flushes pending lines.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_file: PathBuf,
}

impl LoggingGuard {
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}

pub fn build_filter(directives: Option<&str>) -> Result<EnvFilter> {
    Ok(EnvFilter::try_new(directives.unwrap_or(DEFAULT_FILTER))?)
}

/// Install the global subscriber.
///
/// Returns `Ok(None)` when no log file is configured or a subscriber is already
/// installed.
pub fn init(config: &EnvConfig) -> Result<Option<LoggingGuard>> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(None);
    };

    let filter = build_filter(config.log_filter.as_deref())?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return Ok(None);
    }

    tracing::info!(log_file = %path, "tracing initialized");

    Ok(Some(LoggingGuard {
        _guard: guard,
        log_file: PathBuf::from(path),
    }))
}
