//! Last-painted frame, kept for dirty-row diffing.

use crate::core::terminal::TerminalSize;

/// One full screen of row contents as they were last written.
///
/// Row `i` holds the exact string printed at column 0 of terminal row `i`, or an
/// empty string for a cleared row.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Frame {
    size: TerminalSize,
    rows: Vec<String>,
}

impl Frame {
    pub fn new(size: TerminalSize, mut rows: Vec<String>) -> Self {
        rows.resize(usize::from(size.rows), String::new());
        Self { size, rows }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Rows that differ from `previous`, or every row when the sizes differ.
    pub fn dirty_rows(&self, previous: Option<&Frame>) -> Vec<usize> {
        match previous {
            Some(previous) if previous.size == self.size => self
                .rows
                .iter()
                .zip(previous.rows.iter())
                .enumerate()
                .filter(|(_, (next, prev))| next != prev)
                .map(|(row, _)| row)
                .collect(),
            _ => (0..self.rows.len()).collect(),
        }
    }
}
