#![allow(dead_code)]

//! Tiny VT model: replays the sequences this crate emits onto a cell grid.
//!
//! Understands CUP (`H`), EL (`K`), CHA (`G`), CUU/CUD (`A`/`B`), DECSC/DECRC
//! (`ESC 7` / `ESC 8`); SGR and anything else is skipped. LF on the bottom row
//! scrolls. Text past the right edge is dropped rather than wrapped.

pub struct Screen {
    columns: usize,
    rows: usize,
    cells: Vec<Vec<char>>,
    x: usize,
    y: usize,
    saved: Option<(usize, usize)>,
}

impl Screen {
    pub fn new(columns: u16, rows: u16) -> Self {
        let columns = usize::from(columns);
        let rows = usize::from(rows);
        Self {
            columns,
            rows,
            cells: vec![vec![' '; columns]; rows],
            x: 0,
            y: 0,
            saved: None,
        }
    }

    pub fn feed(&mut self, data: &str) {
        let mut chars = data.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\x1b' => match chars.next() {
                    Some('[') => {
                        let mut params = String::new();
                        let mut final_byte = None;
                        for next in chars.by_ref() {
                            if ('@'..='~').contains(&next) {
                                final_byte = Some(next);
                                break;
                            }
                            params.push(next);
                        }
                        if let Some(final_byte) = final_byte {
                            self.csi(&params, final_byte);
                        }
                    }
                    Some('7') => self.saved = Some((self.x, self.y)),
                    Some('8') => {
                        if let Some((x, y)) = self.saved {
                            self.x = x;
                            self.y = y;
                        }
                    }
                    _ => {}
                },
                '\r' => self.x = 0,
                '\n' => self.line_feed(),
                ch => {
                    if self.y < self.rows && self.x < self.columns {
                        self.cells[self.y][self.x] = ch;
                    }
                    self.x += 1;
                }
            }
        }
    }

    fn line_feed(&mut self) {
        if self.y + 1 < self.rows {
            self.y += 1;
        } else if self.rows > 0 {
            self.cells.remove(0);
            self.cells.push(vec![' '; self.columns]);
        }
    }

    fn csi(&mut self, params: &str, final_byte: char) {
        let nums: Vec<usize> = params
            .split(';')
            .map(|part| part.parse().unwrap_or(0))
            .collect();
        let first = nums.first().copied().unwrap_or(0);
        let one_based = |n: usize| n.max(1) - 1;

        match final_byte {
            'H' => {
                self.y = one_based(first);
                self.x = one_based(nums.get(1).copied().unwrap_or(0));
            }
            'G' => self.x = one_based(first),
            'A' => self.y = self.y.saturating_sub(first.max(1)),
            'B' => self.y = (self.y + first.max(1)).min(self.rows.saturating_sub(1)),
            'K' if first == 2 => {
                if let Some(row) = self.cells.get_mut(self.y) {
                    row.iter_mut().for_each(|cell| *cell = ' ');
                }
            }
            _ => {}
        }
    }

    pub fn line(&self, row: usize) -> String {
        self.cells[row].iter().collect::<String>().trim_end().to_string()
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.rows).map(|row| self.line(row)).collect()
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.x, self.y)
    }
}
