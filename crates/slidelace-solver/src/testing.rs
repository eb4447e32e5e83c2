//! Test utilities for the phase solvers.
//!
//! This module provides [`PhaseTester`], a chaining harness for driving
//! phase solvers against fixture boards, and [`scramble`], a random walk
//! that produces solvable configurations for round-trip tests.
//!
//! # Example
//!
//! ```
//! use slidelace_solver::{solve_interior_tile, testing::PhaseTester};
//!
//! PhaseTester::from_rows(&[[1, 2, 8], [4, 5, 3], [6, 7, 0]])
//!     .step(|board| solve_interior_tile(board, 2, 2))
//!     .assert_lower_row_invariant(2, 1);
//! ```

use rand::{Rng, seq::IndexedRandom as _};
use slidelace_core::{Board, Moves};

use crate::invariant;

/// Scrambles a board in place with `steps` random valid moves, returning
/// the walk that was applied.
///
/// Because every step is a legal blank move, the result is always
/// solvable, which makes this the natural fixture generator for
/// solve-and-verify tests.
///
/// # Panics
///
/// Panics if the board has no valid moves, which cannot happen for boards
/// of at least 2×2.
pub fn scramble<R>(board: &mut Board, steps: usize, rng: &mut R) -> Moves
where
    R: Rng + ?Sized,
{
    let mut moves = Moves::new();
    for _ in 0..steps {
        let options = board.valid_moves();
        let direction = *options.as_slice().choose(rng).unwrap();
        board.slide(direction);
        moves.push(direction);
    }
    moves
}

/// A chaining test harness for the phase solvers.
///
/// Holds a board, lets a test drive phases against it, and asserts the
/// invariants the phases are contracted to re-establish. All methods take
/// and return `self` so checks chain fluently; assertion failures report
/// the offending board and use `#[track_caller]` to point at the test
/// line.
#[derive(Debug)]
pub struct PhaseTester {
    board: Board,
    moves: Moves,
}

impl PhaseTester {
    /// Creates a tester around an existing board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            moves: Moves::new(),
        }
    }

    /// Creates a tester from explicit rows of tile values.
    ///
    /// # Panics
    ///
    /// Panics on the same malformed input as [`Board::from_rows`].
    #[track_caller]
    #[must_use]
    pub fn from_rows<R>(rows: &[R]) -> Self
    where
        R: AsRef<[u16]>,
    {
        Self::new(Board::from_rows(rows))
    }

    /// Runs one phase against the board, accumulating its moves.
    #[must_use]
    pub fn step<F>(mut self, phase: F) -> Self
    where
        F: FnOnce(&mut Board) -> Moves,
    {
        let moves = phase(&mut self.board);
        self.moves.append(moves);
        self
    }

    /// Applies a raw move string to the board.
    ///
    /// # Panics
    ///
    /// Panics on an unrecognized symbol or an off-grid move.
    #[track_caller]
    #[must_use]
    pub fn apply_moves(mut self, moves: &str) -> Self {
        self.board.apply_moves(moves);
        self
    }

    /// Asserts the lower-row invariant at `(target_row, target_col)`.
    ///
    /// # Panics
    ///
    /// Panics if the invariant does not hold.
    #[track_caller]
    pub fn assert_lower_row_invariant(self, target_row: usize, target_col: usize) -> Self {
        assert!(
            invariant::lower_row_invariant(&self.board, target_row, target_col),
            "expected the lower-row invariant at ({target_row}, {target_col}), board:\n{}",
            self.board
        );
        self
    }

    /// Asserts the row-0 invariant at `target_col`.
    ///
    /// # Panics
    ///
    /// Panics if the invariant does not hold.
    #[track_caller]
    pub fn assert_row0_invariant(self, target_col: usize) -> Self {
        assert!(
            invariant::row0_invariant(&self.board, target_col),
            "expected the row-0 invariant at column {target_col}, board:\n{}",
            self.board
        );
        self
    }

    /// Asserts the row-1 invariant at `target_col`.
    ///
    /// # Panics
    ///
    /// Panics if the invariant does not hold.
    #[track_caller]
    pub fn assert_row1_invariant(self, target_col: usize) -> Self {
        assert!(
            invariant::row1_invariant(&self.board, target_col),
            "expected the row-1 invariant at column {target_col}, board:\n{}",
            self.board
        );
        self
    }

    /// Asserts that the top-left `rows × cols` rectangle is fully placed.
    ///
    /// # Panics
    ///
    /// Panics if any tile of the rectangle is out of place.
    #[track_caller]
    pub fn assert_region_solved(self, rows: usize, cols: usize) -> Self {
        assert!(
            self.board.region_solved(rows, cols),
            "expected the top-left {rows}x{cols} region to be solved, board:\n{}",
            self.board
        );
        self
    }

    /// Asserts that the whole board is solved.
    ///
    /// # Panics
    ///
    /// Panics if any tile is out of place.
    #[track_caller]
    pub fn assert_solved(self) -> Self {
        assert!(
            self.board.is_solved(),
            "expected a solved board, got:\n{}",
            self.board
        );
        self
    }

    /// Returns the board in its current state.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns all moves accumulated by [`step`](Self::step) so far.
    #[must_use]
    pub fn moves(&self) -> &Moves {
        &self.moves
    }

    /// Consumes the tester, returning the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_scramble_applies_the_requested_number_of_moves() {
        let mut board = Board::solved(3, 3);
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        let moves = scramble(&mut board, 25, &mut rng);
        assert_eq!(moves.len(), 25);
        assert!(board.is_solvable());

        // Undoing the walk restores the solved configuration.
        let undo: Moves = moves
            .as_slice()
            .iter()
            .rev()
            .map(|direction| direction.opposite())
            .collect();
        board.apply(&undo);
        assert!(board.is_solved());
    }

    #[test]
    fn test_steps_accumulate_moves() {
        let tester = PhaseTester::from_rows(&[[1, 2, 8], [4, 5, 3], [6, 7, 0]])
            .step(|board| crate::solve_interior_tile(board, 2, 2));
        assert!(!tester.moves().is_empty());

        // Replaying the accumulated moves reproduces the tester's board.
        let mut replay = Board::from_rows(&[[1, 2, 8], [4, 5, 3], [6, 7, 0]]);
        replay.apply(tester.moves());
        assert_eq!(&replay, tester.board());
    }

    #[test]
    #[should_panic(expected = "expected a solved board")]
    fn test_assertions_report_the_board() {
        let _ = PhaseTester::from_rows(&[[1, 0], [2, 3]]).assert_solved();
    }
}
