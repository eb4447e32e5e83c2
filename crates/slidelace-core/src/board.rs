//! The sliding-tile grid.

use std::{fmt, str::FromStr};

use tinyvec::ArrayVec;

use crate::{Direction, Position};

/// An N×M sliding-tile grid with one blank.
///
/// Tiles are labeled `0..height*width` with `0` denoting the blank. The
/// solved configuration keeps tile `k` at row `k / width`, column
/// `k % width`, which puts the blank in the upper-left corner. The board
/// caches the blank's position, so a primitive move costs O(1) regardless
/// of board size.
///
/// Mutation only ever swaps the blank with one of its orthogonal
/// neighbors, so the multiset of tile values never changes after
/// construction.
///
/// # Examples
///
/// ```
/// use slidelace_core::{Board, Position};
///
/// let mut board = Board::solved(3, 3);
/// assert_eq!(board.blank(), Position::new(0, 0));
///
/// board.apply_moves("drr");
/// assert_eq!(board.blank(), Position::new(1, 2));
/// assert!(!board.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<u16>,
    blank: Position,
}

impl Board {
    /// Creates a board in the solved configuration.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is smaller than 2, or if the tile count
    /// does not fit the `u16` tile labels.
    #[must_use]
    pub fn solved(height: usize, width: usize) -> Self {
        assert_dimensions(height, width);
        #[expect(clippy::cast_possible_truncation)]
        let cells = (0..height * width).map(|value| value as u16).collect();
        Self {
            height,
            width,
            cells,
            blank: Position::new(0, 0),
        }
    }

    /// Creates a board from explicit rows of tile values.
    ///
    /// The caller guarantees the values form a permutation of
    /// `0..height*width`; only the shape and the presence of the blank are
    /// checked here. Use the [`FromStr`] parser for fully validated input.
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged, if either dimension is smaller
    /// than 2, or if no cell holds the blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidelace_core::{Board, Position};
    ///
    /// let board = Board::from_rows(&[[1, 2, 3], [4, 5, 0], [6, 7, 8]]);
    /// assert_eq!(board.blank(), Position::new(1, 2));
    /// ```
    #[must_use]
    pub fn from_rows<R>(rows: &[R]) -> Self
    where
        R: AsRef<[u16]>,
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        assert_dimensions(height, width);

        let mut cells = Vec::with_capacity(height * width);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), width, "all rows must have the same length");
            cells.extend_from_slice(row);
        }

        let Some(blank_index) = cells.iter().position(|&value| value == 0) else {
            panic!("board has no blank (value 0)");
        };
        Self {
            height,
            width,
            cells,
            blank: Position::new(blank_index / width, blank_index % width),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the tile value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the board.
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> u16 {
        assert!(
            row < self.height && col < self.width,
            "coordinate ({row}, {col}) outside {}x{} board",
            self.height,
            self.width
        );
        self.cells[row * self.width + col]
    }

    /// Returns the current position of the blank without scanning.
    #[must_use]
    pub const fn blank(&self) -> Position {
        self.blank
    }

    /// Returns the tile value that belongs at `(row, col)` when solved.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn home_value(&self, row: usize, col: usize) -> u16 {
        debug_assert!(row < self.height && col < self.width);
        (row * self.width + col) as u16
    }

    /// Scans for the cell currently holding `value`.
    ///
    /// Costs O(height × width) per query.
    ///
    /// # Panics
    ///
    /// Panics if `value` is absent, which means the board was constructed
    /// from something other than a permutation.
    #[must_use]
    pub fn locate(&self, value: u16) -> Position {
        match self.cells.iter().position(|&cell| cell == value) {
            Some(index) => Position::new(index / self.width, index % self.width),
            None => panic!("value {value} not found on the board"),
        }
    }

    /// Swaps the blank with its neighbor in `direction`.
    ///
    /// # Panics
    ///
    /// Panics if the move would take the blank off the board.
    pub fn slide(&mut self, direction: Direction) {
        let Position { row, col } = self.blank;
        let target = match direction {
            Direction::Up => {
                assert!(row > 0, "move off grid: {direction}");
                Position::new(row - 1, col)
            }
            Direction::Down => {
                assert!(row + 1 < self.height, "move off grid: {direction}");
                Position::new(row + 1, col)
            }
            Direction::Left => {
                assert!(col > 0, "move off grid: {direction}");
                Position::new(row, col - 1)
            }
            Direction::Right => {
                assert!(col + 1 < self.width, "move off grid: {direction}");
                Position::new(row, col + 1)
            }
        };
        let from = row * self.width + col;
        let to = target.row * self.width + target.col;
        self.cells.swap(from, to);
        self.blank = target;
    }

    /// Applies a sequence of moves in order.
    ///
    /// # Panics
    ///
    /// Panics if any move would take the blank off the board.
    pub fn apply<I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = Direction>,
    {
        for direction in moves {
            self.slide(direction);
        }
    }

    /// Applies a move string over the `u`/`d`/`l`/`r` alphabet.
    ///
    /// # Panics
    ///
    /// Panics on an unrecognized symbol or an off-grid move.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidelace_core::Board;
    ///
    /// let mut board = Board::solved(2, 2);
    /// board.apply_moves("drul");
    /// assert!(!board.is_solved());
    /// board.apply_moves("drul");
    /// board.apply_moves("drul");
    /// assert!(board.is_solved());
    /// ```
    pub fn apply_moves(&mut self, moves: &str) {
        for symbol in moves.chars() {
            self.slide(Direction::from_char(symbol));
        }
    }

    /// Returns the directions the blank can currently move, in `u`, `d`,
    /// `l`, `r` order.
    #[must_use]
    pub fn valid_moves(&self) -> ArrayVec<[Direction; 4]> {
        let mut moves = ArrayVec::new();
        if self.blank.row > 0 {
            moves.push(Direction::Up);
        }
        if self.blank.row + 1 < self.height {
            moves.push(Direction::Down);
        }
        if self.blank.col > 0 {
            moves.push(Direction::Left);
        }
        if self.blank.col + 1 < self.width {
            moves.push(Direction::Right);
        }
        moves
    }

    /// Checks whether `(row, col)` holds the tile it holds when solved.
    #[must_use]
    pub fn is_home(&self, row: usize, col: usize) -> bool {
        self.tile(row, col) == self.home_value(row, col)
    }

    /// Checks whether the top-left `rows × cols` rectangle is fully
    /// placed.
    #[must_use]
    pub fn region_solved(&self, rows: usize, cols: usize) -> bool {
        (0..rows).all(|row| (0..cols).all(|col| self.is_home(row, col)))
    }

    /// Checks whether the whole board is in the solved configuration.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.region_solved(self.height, self.width)
    }

    /// Checks whether the configuration can reach the solved state at all.
    ///
    /// Every blank swap is a transposition of the tile permutation and
    /// changes the blank's taxicab distance from `(0, 0)` by one, so on
    /// any reachable configuration the parity of the row-major inversion
    /// count equals the parity of that distance.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidelace_core::Board;
    ///
    /// assert!(Board::from_rows(&[[1, 0], [2, 3]]).is_solvable());
    /// assert!(!Board::from_rows(&[[1, 0], [3, 2]]).is_solvable());
    /// ```
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let mut inversions = 0_usize;
        for (i, &cell) in self.cells.iter().enumerate() {
            inversions += self.cells[i + 1..]
                .iter()
                .filter(|&&later| later < cell)
                .count();
        }
        let blank_distance = self.blank.row + self.blank.col;
        inversions % 2 == blank_distance % 2
    }
}

fn assert_dimensions(height: usize, width: usize) {
    assert!(
        height >= 2 && width >= 2,
        "board must be at least 2x2, got {height}x{width}"
    );
    assert!(
        height * width <= usize::from(u16::MAX) + 1,
        "tile labels must fit u16: {height}x{width} is too large"
    );
}

/// The error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// Fewer than two rows or two columns.
    #[display("board must be at least 2x2, got {height}x{width}")]
    TooSmall {
        /// Parsed row count.
        height: usize,
        /// Parsed column count.
        width: usize,
    },
    /// A row with a different number of tiles than the first row.
    #[display("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },
    /// A token that is not a tile number.
    #[display("invalid tile value: {token:?}")]
    InvalidTile {
        /// The offending token.
        token: String,
    },
    /// A tile value outside `0..height*width`.
    #[display("tile value {value} out of range for a board of {limit} cells")]
    OutOfRange {
        /// The offending value.
        value: u16,
        /// Number of cells on the board.
        limit: usize,
    },
    /// A tile value that occurs more than once.
    #[display("duplicate tile value: {value}")]
    Duplicate {
        /// The repeated value.
        value: u16,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses whitespace-separated tile numbers, one board row per line.
    /// Blank lines are skipped; unlike [`Board::from_rows`], the values
    /// are fully validated as a permutation of `0..height*width`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<u16>> = Vec::new();
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<u16>()
                        .map_err(|_| ParseBoardError::InvalidTile {
                            token: token.to_owned(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height < 2 || width < 2 {
            return Err(ParseBoardError::TooSmall { height, width });
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }

        let limit = height * width;
        let mut seen = vec![false; limit];
        for &value in rows.iter().flatten() {
            let index = usize::from(value);
            if index >= limit {
                return Err(ParseBoardError::OutOfRange { value, limit });
            }
            if seen[index] {
                return Err(ParseBoardError::Duplicate { value });
            }
            seen[index] = true;
        }

        Ok(Self::from_rows(&rows))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = (self.height * self.width - 1).to_string().len();
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.width {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>cell_width$}", self.tile(row, col))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_solved_layout() {
        let board = Board::solved(2, 3);
        assert_eq!(board.height(), 2);
        assert_eq!(board.width(), 3);
        assert_eq!(board.blank(), Position::new(0, 0));
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(usize::from(board.tile(row, col)), row * 3 + col);
            }
        }
        assert!(board.is_solved());
    }

    #[test]
    fn test_slide_swaps_with_the_neighbor() {
        let mut board = Board::solved(3, 3);
        board.slide(Direction::Down);
        assert_eq!(board.blank(), Position::new(1, 0));
        assert_eq!(board.tile(0, 0), 3);
        board.slide(Direction::Right);
        assert_eq!(board.blank(), Position::new(1, 1));
        assert_eq!(board.tile(1, 0), 4);
    }

    #[test]
    fn test_apply_moves_matches_a_hand_computed_walk() {
        let mut board = Board::from_rows(&[[1, 2, 3], [4, 5, 0], [6, 7, 8]]);
        board.apply_moves("ldru");
        assert_eq!(board, Board::from_rows(&[[1, 2, 3], [4, 7, 0], [6, 8, 5]]));
    }

    #[test]
    #[should_panic(expected = "move off grid: u")]
    fn test_slide_rejects_off_grid_moves() {
        let mut board = Board::solved(2, 2);
        board.slide(Direction::Up);
    }

    #[test]
    #[should_panic(expected = "invalid move symbol: 'x'")]
    fn test_apply_moves_rejects_unknown_symbols() {
        let mut board = Board::solved(2, 2);
        board.apply_moves("dx");
    }

    #[test]
    fn test_valid_moves_at_corners_and_center() {
        let board = Board::solved(3, 3);
        assert_eq!(
            board.valid_moves().as_slice(),
            [Direction::Down, Direction::Right]
        );

        let mut board = Board::solved(3, 3);
        board.apply_moves("dr");
        assert_eq!(board.valid_moves().as_slice(), Direction::ALL);

        board.apply_moves("dr");
        assert_eq!(
            board.valid_moves().as_slice(),
            [Direction::Up, Direction::Left]
        );
    }

    #[test]
    fn test_locate_finds_every_tile() {
        let board = Board::from_rows(&[[8, 2, 6], [4, 5, 3], [1, 7, 0]]);
        assert_eq!(board.locate(8), Position::new(0, 0));
        assert_eq!(board.locate(0), Position::new(2, 2));
        assert_eq!(board.locate(0), board.blank());
        assert_eq!(board.locate(3), Position::new(1, 2));
    }

    #[test]
    #[should_panic(expected = "value 9 not found")]
    fn test_locate_rejects_a_missing_value() {
        let _ = Board::solved(3, 3).locate(9);
    }

    #[test]
    #[should_panic(expected = "board has no blank")]
    fn test_from_rows_requires_a_blank() {
        let _ = Board::from_rows(&[[1, 2], [3, 4]]);
    }

    #[test]
    fn test_region_solved() {
        let board = Board::from_rows(&[[0, 1, 2], [3, 4, 5], [7, 6, 8]]);
        assert!(board.region_solved(2, 3));
        assert!(!board.region_solved(3, 3));
        assert!(!board.is_solved());
    }

    #[test]
    fn test_solvability_is_preserved_by_moves() {
        let mut board = Board::solved(4, 4);
        assert!(board.is_solvable());
        board.apply_moves("drdrulddru");
        assert!(board.is_solvable());
    }

    #[test]
    fn test_swapping_two_tiles_flips_solvability() {
        assert!(!Board::from_rows(&[[1, 0], [3, 2]]).is_solvable());
        assert!(!Board::from_rows(&[[0, 2, 1], [3, 4, 5], [6, 7, 8]]).is_solvable());
    }

    #[test]
    fn test_parse_round_trips_with_display() {
        let board: Board = "1 3 7 6\n4 9 2 10\n8 13 14 5\n12 0 15 11".parse().unwrap();
        assert_eq!(board.locate(0), Position::new(3, 1));
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "1 0".parse::<Board>(),
            Err(ParseBoardError::TooSmall {
                height: 1,
                width: 2
            })
        );
        assert_eq!(
            "0 1\n2".parse::<Board>(),
            Err(ParseBoardError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            "0 1\n2 x".parse::<Board>(),
            Err(ParseBoardError::InvalidTile {
                token: "x".to_owned()
            })
        );
        assert_eq!(
            "0 1\n2 9".parse::<Board>(),
            Err(ParseBoardError::OutOfRange { value: 9, limit: 4 })
        );
        assert_eq!(
            "0 1\n2 2".parse::<Board>(),
            Err(ParseBoardError::Duplicate { value: 2 })
        );
    }

    proptest! {
        #[test]
        fn random_walks_only_relocate_the_blank(
            height in 2_usize..6,
            width in 2_usize..6,
            picks in proptest::collection::vec(0_usize..4, 0..64),
        ) {
            let mut board = Board::solved(height, width);
            for pick in picks {
                let options = board.valid_moves();
                board.slide(options[pick % options.len()]);
                prop_assert_eq!(board.locate(0), board.blank());
            }

            let mut seen = vec![false; height * width];
            for row in 0..height {
                for col in 0..width {
                    seen[usize::from(board.tile(row, col))] = true;
                }
            }
            prop_assert!(seen.into_iter().all(|present| present));
            prop_assert!(board.is_solvable());
        }
    }
}
