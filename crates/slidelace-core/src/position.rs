//! Board coordinates.

use derive_more::Display;

/// A cell coordinate on a board, row-major and zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the cell a tile value occupies in the solved configuration.
    ///
    /// Tile `v` belongs at row `v / width`, column `v % width`; the blank
    /// (value 0) belongs at `(0, 0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidelace_core::Position;
    ///
    /// assert_eq!(Position::home_of(0, 4), Position::new(0, 0));
    /// assert_eq!(Position::home_of(7, 4), Position::new(1, 3));
    /// ```
    #[must_use]
    pub fn home_of(value: u16, width: usize) -> Self {
        let value = usize::from(value);
        Self {
            row: value / width,
            col: value % width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_of_covers_a_full_board() {
        let (height, width) = (3, 4);
        for value in 0..u16::try_from(height * width).unwrap() {
            let home = Position::home_of(value, width);
            assert!(home.row < height);
            assert!(home.col < width);
            assert_eq!(home.row * width + home.col, usize::from(value));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 5).to_string(), "(2, 5)");
    }
}
