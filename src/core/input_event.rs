//! Decoded key events delivered to components.
//!
//! Each keystroke arrives as a pair: the raw characters the terminal sent and a
//! decoded [`Key`]. Decoding is the event source's job (see `platform::keys`).

/// Decoded key metadata.
///
/// `name` is absent for keys the decoder could not identify; components treat
/// those as no-ops for state but may still render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Key {
    pub name: Option<String>,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Key {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is(&self, name: &str) -> bool {
        self.name() == Some(name)
    }

    pub fn is_ctrl_c(&self) -> bool {
        self.ctrl && self.is("c")
    }
}

/// C0 controls (0x00..=0x1F) and DEL.
pub fn is_control_char(ch: char) -> bool {
    matches!(ch, '\u{0}'..='\u{1f}' | '\u{7f}')
}

/// Raw input that should be appended to a text buffer.
pub fn is_printable(raw: &str) -> bool {
    !raw.is_empty() && !raw.chars().any(is_control_char)
}
