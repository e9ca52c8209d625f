//! Typed terminal output commands.
//!
//! Byte sequences come from crossterm's command encoders; nothing in this crate
//! spells out escape sequences itself.

use crossterm::cursor::{MoveDown, MoveTo, MoveToColumn, MoveUp, RestorePosition, SavePosition};
use crossterm::terminal::{Clear, ClearType};
use crossterm::Command;

use crate::core::cursor::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCmd {
    /// Printable text, written as-is.
    Text(String),
    /// Absolute cursor move.
    MoveTo(Position),
    /// Move within the current row.
    MoveToColumn(u16),
    /// Move down `n` rows, column unchanged.
    MoveDown(u16),
    MoveUp(u16),
    /// Erase the whole current line.
    ClearLine,
    SavePosition,
    RestorePosition,
}

impl TerminalCmd {
    pub fn text(data: impl Into<String>) -> Self {
        Self::Text(data.into())
    }

    /// Append this command's bytes to `out`.
    pub fn encode_into(&self, out: &mut String) {
        // fmt::Write for String is infallible.
        let _ = match self {
            TerminalCmd::Text(data) => {
                out.push_str(data);
                Ok(())
            }
            TerminalCmd::MoveTo(pos) => MoveTo(pos.x, pos.y).write_ansi(out),
            TerminalCmd::MoveToColumn(col) => MoveToColumn(*col).write_ansi(out),
            TerminalCmd::MoveDown(rows) => MoveDown(*rows).write_ansi(out),
            TerminalCmd::MoveUp(rows) => MoveUp(*rows).write_ansi(out),
            TerminalCmd::ClearLine => Clear(ClearType::CurrentLine).write_ansi(out),
            TerminalCmd::SavePosition => SavePosition.write_ansi(out),
            TerminalCmd::RestorePosition => RestorePosition.write_ansi(out),
        };
    }

    pub fn encode(&self) -> String {
        let mut out = String::new();
        self.encode_into(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::TerminalCmd;
    use crate::core::cursor::Position;

    #[test]
    fn text_passes_through() {
        assert_eq!(TerminalCmd::text("hi").encode(), "hi");
    }

    #[test]
    fn cursor_moves_are_one_based_on_the_wire() {
        assert_eq!(TerminalCmd::MoveTo(Position::new(0, 0)).encode(), "\x1b[1;1H");
        assert_eq!(TerminalCmd::MoveTo(Position::new(4, 2)).encode(), "\x1b[3;5H");
        assert_eq!(TerminalCmd::MoveToColumn(0).encode(), "\x1b[1G");
    }

    #[test]
    fn erase_and_save_restore() {
        assert_eq!(TerminalCmd::ClearLine.encode(), "\x1b[2K");
        assert_eq!(TerminalCmd::MoveDown(1).encode(), "\x1b[1B");
        assert_eq!(TerminalCmd::MoveUp(2).encode(), "\x1b[2A");
        assert_eq!(TerminalCmd::SavePosition.encode(), "\x1b7");
        assert_eq!(TerminalCmd::RestorePosition.encode(), "\x1b8");
    }
}
