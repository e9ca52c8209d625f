//! Render surface: position-relative print/clear primitives over a shared terminal.
//!
//! The surface performs no implicit clearing. Callers clear or position before
//! writing new content at a row, otherwise stale cells stay on screen.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::core::cursor::Position;
use crate::core::output::TerminalCmd;
use crate::core::terminal::{Terminal, TerminalSize};

/// Handle shared by every widget writing to the same terminal.
///
/// Cloning is cheap and yields a handle onto the same sink. Only the focused
/// widget is expected to write; nothing here enforces that.
pub struct RenderSurface<T: Terminal> {
    terminal: Rc<RefCell<T>>,
}

impl<T: Terminal> Clone for RenderSurface<T> {
    fn clone(&self) -> Self {
        Self {
            terminal: Rc::clone(&self.terminal),
        }
    }
}

impl<T: Terminal> RenderSurface<T> {
    pub fn new(terminal: T) -> Self {
        Self::from_shared(Rc::new(RefCell::new(terminal)))
    }

    pub fn from_shared(terminal: Rc<RefCell<T>>) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> Ref<'_, T> {
        self.terminal.borrow()
    }

    pub fn terminal_mut(&self) -> RefMut<'_, T> {
        self.terminal.borrow_mut()
    }

    /// Write raw text at the current cursor position.
    pub fn print(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.terminal.borrow_mut().write(text);
    }

    /// Relocate the cursor. Out-of-range positions are passed through.
    pub fn move_cursor_to(&self, position: Position) {
        self.emit(TerminalCmd::MoveTo(position));
    }

    pub fn print_at(&self, text: &str, position: Position) {
        self.move_cursor_to(position);
        self.print(text);
    }

    /// Move to column 0 of `row` and erase that line.
    pub fn clear_line(&self, row: u16) {
        self.move_cursor_to(Position::row_start(row));
        self.erase_current_line();
    }

    pub fn erase_current_line(&self) {
        self.emit(TerminalCmd::ClearLine);
    }

    pub fn move_to_column(&self, column: u16) {
        self.emit(TerminalCmd::MoveToColumn(column));
    }

    pub fn move_down(&self, rows: u16) {
        self.emit(TerminalCmd::MoveDown(rows));
    }

    pub fn move_up(&self, rows: u16) {
        self.emit(TerminalCmd::MoveUp(rows));
    }

    /// Make room for `rows` lines below the cursor, scrolling the terminal when
    /// the cursor sits near the bottom. Ends at column 0 of the original content row.
    pub fn reserve_rows_below(&self, rows: u16) {
        if rows == 0 {
            return;
        }
        self.print(&"\r\n".repeat(usize::from(rows)));
        self.move_up(rows);
    }

    pub fn save_cursor(&self) {
        self.emit(TerminalCmd::SavePosition);
    }

    pub fn restore_cursor(&self) {
        self.emit(TerminalCmd::RestorePosition);
    }

    pub fn flush(&self) {
        self.terminal.borrow_mut().flush();
    }

    /// Live size of the terminal; `0 x 0` for non-interactive sinks.
    pub fn terminal_size(&self) -> TerminalSize {
        let terminal = self.terminal.borrow();
        TerminalSize::new(terminal.columns(), terminal.rows())
    }

    fn emit(&self, cmd: TerminalCmd) {
        self.terminal.borrow_mut().write(&cmd.encode());
    }
}
