//! Environment configuration.

use std::env;

use crate::error::{Error, Result};

pub const LOG_FILTER_VAR: &str = "TAPE_PROMPT_LOG";
pub const LOG_FILE_VAR: &str = "TAPE_PROMPT_LOG_FILE";
pub const DIRTY_REDRAW_VAR: &str = "TAPE_PROMPT_DIRTY_REDRAW";
pub const LIST_MARGIN_VAR: &str = "TAPE_PROMPT_LIST_MARGIN";

/// How the scroll list repaints between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedrawMode {
    /// Clear every terminal row, then print the visible window.
    #[default]
    FullClear,
    /// Only clear and reprint rows whose content changed since the last frame.
    DirtyRows,
}

#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub log_filter: Option<String>,
    pub log_file: Option<String>,
    pub redraw: RedrawMode,
    pub list_bottom_margin: u16,
}

impl EnvConfig {
    pub fn from_env() -> Result<Self> {
        let redraw = if env_flag(DIRTY_REDRAW_VAR) {
            RedrawMode::DirtyRows
        } else {
            RedrawMode::FullClear
        };

        let list_bottom_margin = match env_string_opt(LIST_MARGIN_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| Error::InvalidConfig {
                    key: LIST_MARGIN_VAR,
                    value,
                })?,
            None => 0,
        };

        Ok(Self {
            log_filter: env_string_opt(LOG_FILTER_VAR),
            log_file: env_string_opt(LOG_FILE_VAR),
            redraw,
            list_bottom_margin,
        })
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
