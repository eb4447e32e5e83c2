use log::{debug, trace};
use slidelace_core::{Board, Moves, Position};

use crate::{invariant, phase, walk};

/// Statistics collected while solving a board.
///
/// Tracks how many tiles each phase placed and the length of the produced
/// move sequence. Useful for demos and benchmarks that want to show where
/// the moves went.
///
/// # Examples
///
/// ```
/// use slidelace_core::Board;
/// use slidelace_solver::solve_with_stats;
///
/// let mut board: Board = "1 2 5
///                         3 4 0
///                         6 7 8"
///     .parse()?;
/// let (moves, stats) = solve_with_stats(&mut board);
/// assert_eq!(stats.total_moves(), moves.len());
/// assert_eq!(stats.interior_tiles(), 2);
/// # Ok::<(), slidelace_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    interior_tiles: usize,
    column_zero_tiles: usize,
    row_one_tiles: usize,
    row_zero_tiles: usize,
    total_moves: usize,
}

impl SolveStats {
    /// Returns the number of interior tiles placed in the lower rows.
    #[must_use]
    pub const fn interior_tiles(&self) -> usize {
        self.interior_tiles
    }

    /// Returns the number of column-0 tiles placed.
    #[must_use]
    pub const fn column_zero_tiles(&self) -> usize {
        self.column_zero_tiles
    }

    /// Returns the number of row-1 tiles placed in the top strip.
    #[must_use]
    pub const fn row_one_tiles(&self) -> usize {
        self.row_one_tiles
    }

    /// Returns the number of row-0 tiles placed in the top strip.
    #[must_use]
    pub const fn row_zero_tiles(&self) -> usize {
        self.row_zero_tiles
    }

    /// Returns the length of the produced move sequence.
    #[must_use]
    pub const fn total_moves(&self) -> usize {
        self.total_moves
    }
}

/// Solves the board, returning the applied move sequence.
///
/// The board ends in the solved configuration. The sequence is
/// deterministic for a given starting configuration, and correct but not
/// minimal; applying it to a copy of the starting board reproduces the
/// solved state.
///
/// # Panics
///
/// Panics if the configuration is not solvable (see
/// [`Board::is_solvable`]).
///
/// # Examples
///
/// ```
/// use slidelace_core::Board;
/// use slidelace_solver::solve;
///
/// let mut board: Board = "1 3 7 6
///                         4 9 2 10
///                         8 13 14 5
///                         12 0 15 11"
///     .parse()?;
/// solve(&mut board);
/// assert!(board.is_solved());
/// # Ok::<(), slidelace_core::ParseBoardError>(())
/// ```
pub fn solve(board: &mut Board) -> Moves {
    solve_with_stats(board).0
}

/// Solves the board like [`solve`], also reporting phase statistics.
///
/// # Panics
///
/// Panics if the configuration is not solvable.
pub fn solve_with_stats(board: &mut Board) -> (Moves, SolveStats) {
    assert!(
        board.is_solvable(),
        "configuration cannot reach the solved state:\n{board}"
    );
    debug!("solving a {}x{} board", board.height(), board.width());

    let mut stats = SolveStats::default();
    let mut moves = walk::move_blank_to(
        board,
        Position::new(board.height() - 1, board.width() - 1),
    );

    for row in (2..board.height()).rev() {
        for col in (1..board.width()).rev() {
            trace!("placing interior tile ({row}, {col})");
            moves.append(phase::solve_interior_tile(board, row, col));
            stats.interior_tiles += 1;
        }
        trace!("placing column-0 tile ({row}, 0)");
        moves.append(phase::solve_col0_tile(board, row));
        stats.column_zero_tiles += 1;
    }

    debug_assert!(
        invariant::row1_invariant(board, board.width() - 1),
        "all rows below 1 must be placed before the top strip:\n{board}"
    );
    for col in (2..board.width()).rev() {
        trace!("placing top-strip tiles of column {col}");
        moves.append(phase::solve_row1_tile(board, col));
        stats.row_one_tiles += 1;
        moves.append(phase::solve_row0_tile(board, col));
        stats.row_zero_tiles += 1;
    }

    moves.append(phase::solve_2x2(board));

    debug_assert!(
        board.is_solved(),
        "solve must leave the board solved:\n{board}"
    );
    debug!("solved in {} moves", moves.len());

    stats.total_moves = moves.len();
    (moves, stats)
}
