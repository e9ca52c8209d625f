//! Stdout-backed terminal.

use std::io::{self, BufWriter, Stdout, Write};

use crate::core::terminal::Terminal;

#[cfg(unix)]
use libc::{self, c_int};

/// Buffered writer over the process's stdout.
///
/// Write failures are logged once and dropped.
pub struct ProcessTerminal {
    out: BufWriter<Stdout>,
    #[cfg(unix)]
    stdout_fd: c_int,
    write_failed: bool,
}

impl ProcessTerminal {
    pub fn new() -> Self {
        Self {
            out: BufWriter::new(io::stdout()),
            #[cfg(unix)]
            stdout_fd: libc::STDOUT_FILENO,
            write_failed: false,
        }
    }

    fn note_failure(&mut self, op: &str, err: io::Error) {
        if !self.write_failed {
            tracing::warn!(%err, op, "terminal write failed");
            self.write_failed = true;
        }
    }
}

impl Default for ProcessTerminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn read_winsize(fd: c_int) -> Option<(u16, u16)> {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut size) };
    if result == 0 && size.ws_col > 0 && size.ws_row > 0 {
        Some((size.ws_col, size.ws_row))
    } else {
        None
    }
}

impl Terminal for ProcessTerminal {
    fn write(&mut self, data: &str) {
        if let Err(err) = self.out.write_all(data.as_bytes()) {
            self.note_failure("write", err);
        }
    }

    fn flush(&mut self) {
        if let Err(err) = self.out.flush() {
            self.note_failure("flush", err);
        }
    }

    #[cfg(unix)]
    fn columns(&self) -> u16 {
        read_winsize(self.stdout_fd)
            .map(|(cols, _)| cols)
            .unwrap_or(0)
    }

    #[cfg(unix)]
    fn rows(&self) -> u16 {
        read_winsize(self.stdout_fd)
            .map(|(_, rows)| rows)
            .unwrap_or(0)
    }

    #[cfg(not(unix))]
    fn columns(&self) -> u16 {
        crossterm::terminal::size().map(|(cols, _)| cols).unwrap_or(0)
    }

    #[cfg(not(unix))]
    fn rows(&self) -> u16 {
        crossterm::terminal::size().map(|(_, rows)| rows).unwrap_or(0)
    }
}

impl Drop for ProcessTerminal {
    fn drop(&mut self) {
        let _ = self.out.flush();
    }
}
