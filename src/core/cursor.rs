/// Zero-indexed cell position, top-left origin.
///
/// Built fresh for each draw call; never cache one across a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Column 0 of `row`.
    pub const fn row_start(row: u16) -> Self {
        Self { x: 0, y: row }
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn row_start_is_column_zero() {
        assert_eq!(Position::row_start(7), Position::new(0, 7));
        assert_eq!(Position::default(), Position::new(0, 0));
    }
}
