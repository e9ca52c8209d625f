//! Platform-specific terminal integrations.

pub mod keys;
pub mod process_terminal;

pub use keys::{decode_key_event, poll_key, read_key, RawModeGuard};
pub use process_terminal::ProcessTerminal;
