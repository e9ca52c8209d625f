//! Terminal sink trait and the in-memory implementation.

/// Terminal dimensions in cells. `0 x 0` means the sink reports no size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalSize {
    pub columns: u16,
    pub rows: u16,
}

impl TerminalSize {
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    pub const fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }
}

/// Minimal raw output interface.
///
/// Sizes are queried live on every call; implementations must not cache them.
pub trait Terminal {
    /// Write output to the terminal. Failures are the implementation's to handle.
    fn write(&mut self, data: &str);

    /// Push any buffered output to the device.
    fn flush(&mut self) {}

    /// Terminal dimensions, `0` when unknown.
    fn columns(&self) -> u16;
    fn rows(&self) -> u16;
}

/// Terminal that records everything written to it.
///
/// The reported size is whatever was last set with [`MemoryTerminal::resize`].
#[derive(Debug, Clone, Default)]
pub struct MemoryTerminal {
    output: String,
    size: TerminalSize,
    flushes: usize,
}

impl MemoryTerminal {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            output: String::new(),
            size: TerminalSize::new(columns, rows),
            flushes: 0,
        }
    }

    /// A sink with no size, like output redirected to a file.
    pub fn non_interactive() -> Self {
        Self::default()
    }

    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.size = TerminalSize::new(columns, rows);
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Drain the recorded output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl Terminal for MemoryTerminal {
    fn write(&mut self, data: &str) {
        self.output.push_str(data);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }

    fn columns(&self) -> u16 {
        self.size.columns
    }

    fn rows(&self) -> u16 {
        self.size.rows
    }
}
