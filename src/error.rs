//! Crate error type for setup paths (configuration, log sinks, raw mode, key reads).
//!
//! Rendering never returns errors; see `platform::process_terminal` for how write
//! failures are handled.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
