//! Phase solvers, one routine per kind of tile placement.
//!
//! Solving proceeds bottom-up through four kinds of placement, each with
//! its own routine: interior tiles of the lower rows, the column-0 tile
//! that finishes a lower row, the paired row-1/row-0 tiles of the top
//! strip, and the final 2×2 corner. Every routine mutates the board,
//! returns the moves it applied, and re-establishes the next invariant of
//! [`crate::invariant`], so each is independently callable and testable
//! given its documented precondition.

pub use self::{
    column_zero::solve_col0_tile, corner::solve_2x2, interior::solve_interior_tile,
    row_one::solve_row1_tile, row_zero::solve_row0_tile,
};

mod column_zero;
mod corner;
mod interior;
mod row_one;
mod row_zero;
