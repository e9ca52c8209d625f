//! Adapter from crossterm key events to `(raw, Key)` pairs.
//!
//! Names follow the readline convention: `up`, `down`, `left`, `right`, `return`,
//! `backspace`, `escape`, `tab`, `space`, `delete`, and lowercase letters.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::core::input_event::Key;
use crate::error::Result;

/// Raw mode for as long as the guard lives.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::debug!("raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::warn!(%err, "failed to leave raw mode");
        }
    }
}

/// Block until the next key press. Non-key events yield `Ok(None)`.
pub fn read_key() -> Result<Option<(String, Key)>> {
    match event::read()? {
        Event::Key(key_event) => Ok(decode_key_event(&key_event)),
        _ => Ok(None),
    }
}

/// Like [`read_key`], but gives up after `timeout`.
pub fn poll_key(timeout: Duration) -> Result<Option<(String, Key)>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    read_key()
}

/// Decode a press/repeat event. Releases are dropped.
pub fn decode_key_event(event: &KeyEvent) -> Option<(String, Key)> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let meta = event.modifiers.contains(KeyModifiers::ALT);
    let mut shift = event.modifiers.contains(KeyModifiers::SHIFT);

    let (raw, name): (String, Option<String>) = match event.code {
        KeyCode::Char(ch) => {
            if ch.is_ascii_uppercase() {
                shift = true;
            }
            let raw = if ctrl && ch.is_ascii_alphabetic() {
                char::from(ch.to_ascii_lowercase() as u8 & 0x1f).to_string()
            } else {
                ch.to_string()
            };
            let name = match ch {
                ' ' => Some("space".to_string()),
                ch if ch.is_ascii_alphanumeric() => Some(ch.to_ascii_lowercase().to_string()),
                _ => None,
            };
            (raw, name)
        }
        KeyCode::Up => ("\x1b[A".to_string(), Some("up".to_string())),
        KeyCode::Down => ("\x1b[B".to_string(), Some("down".to_string())),
        KeyCode::Right => ("\x1b[C".to_string(), Some("right".to_string())),
        KeyCode::Left => ("\x1b[D".to_string(), Some("left".to_string())),
        KeyCode::Enter => ("\r".to_string(), Some("return".to_string())),
        KeyCode::Backspace => ("\x7f".to_string(), Some("backspace".to_string())),
        KeyCode::Esc => ("\x1b".to_string(), Some("escape".to_string())),
        KeyCode::Tab => ("\t".to_string(), Some("tab".to_string())),
        KeyCode::BackTab => {
            shift = true;
            ("\x1b[Z".to_string(), Some("tab".to_string()))
        }
        KeyCode::Delete => ("\x1b[3~".to_string(), Some("delete".to_string())),
        KeyCode::Home => ("\x1b[H".to_string(), Some("home".to_string())),
        KeyCode::End => ("\x1b[F".to_string(), Some("end".to_string())),
        KeyCode::PageUp => ("\x1b[5~".to_string(), Some("pageup".to_string())),
        KeyCode::PageDown => ("\x1b[6~".to_string(), Some("pagedown".to_string())),
        _ => (String::new(), None),
    };

    Some((
        raw,
        Key {
            name,
            ctrl,
            meta,
            shift,
        },
    ))
}
