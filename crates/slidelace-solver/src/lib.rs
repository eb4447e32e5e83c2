//! Layer-by-layer solver for sliding-tile puzzles.
//!
//! The solver reduces a [`Board`](slidelace_core::Board) bottom-up: each
//! row below row 1 is placed right-to-left and finished with its column-0
//! tile, the top two rows are then placed column by column, and a final
//! rotation orders the 2×2 corner. Each phase consumes a predicate from
//! [`invariant`] as its precondition and re-establishes a stronger one, so
//! the phases compose into a full solve without any search.
//!
//! The produced move sequence is always correct but deliberately not
//! minimal.
//!
//! # Examples
//!
//! ```
//! use slidelace_core::Board;
//! use slidelace_solver::solve;
//!
//! let mut board: Board = "1 2 5
//!                         3 4 0
//!                         6 7 8"
//!     .parse()?;
//! let moves = solve(&mut board);
//! assert!(board.is_solved());
//! assert!(!moves.is_empty());
//! # Ok::<(), slidelace_core::ParseBoardError>(())
//! ```

pub use self::{
    phase::{solve_2x2, solve_col0_tile, solve_interior_tile, solve_row0_tile, solve_row1_tile},
    solver::{SolveStats, solve, solve_with_stats},
};

pub mod invariant;
pub mod phase;
mod solver;
pub mod testing;
mod walk;
