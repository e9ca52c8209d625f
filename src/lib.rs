//! Minimal inline terminal widgets.
//!
//! Invariant: widgets write only through a [`RenderSurface`]; escape sequences come
//! from crossterm's command encoders via `core::output::TerminalCmd`.
//!
//! # Public API Overview
//! - Wrap a [`Terminal`] ([`ProcessTerminal`] or [`MemoryTerminal`]) in a
//!   [`RenderSurface`] and hand clones of it to widgets.
//! - [`ScrollList`] is a full-screen keyboard-navigable list.
//! - [`TextPrompt`] is a single-line input with an inline validation line.
//! - Feed both `(raw, Key)` pairs through [`Component::on_key_input`];
//!   [`decode_key_event`] builds those pairs from crossterm events.
//!
//! Everything here is single-threaded: the surface shares its terminal through
//! `Rc<RefCell<_>>`, and the host decides which widget has focus.

pub mod config;
pub mod error;
pub mod logging;

pub mod core;
pub mod platform;
pub mod render;
pub mod widgets;

pub use crate::config::{EnvConfig, RedrawMode};
pub use crate::error::{Error, Result};

/// Component traits and input types.
pub use crate::core::component::{Component, Renderable};
pub use crate::core::cursor::Position;
pub use crate::core::input_event::{is_control_char, is_printable, Key};

/// Terminal interfaces and implementations.
pub use crate::core::terminal::{MemoryTerminal, Terminal, TerminalSize};
pub use crate::platform::{decode_key_event, poll_key, read_key, ProcessTerminal, RawModeGuard};

pub use crate::render::RenderSurface;

/// Built-in widgets.
pub use crate::widgets::{
    non_empty, ListAction, ScrollList, ScrollListOptions, ScrollListTheme, TextPrompt,
    TextPromptOptions, TextPromptTheme, Validation, Validator,
};
