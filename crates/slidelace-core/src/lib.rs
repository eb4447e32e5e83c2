//! Core data structures for sliding-tile puzzles.
//!
//! This crate provides the grid primitives shared by the solving and
//! driving components:
//!
//! - [`Board`]: the N×M tile grid with O(1) blank tracking, move
//!   application, and position lookup
//! - [`Direction`]: the primitive blank moves and their `u`/`d`/`l`/`r`
//!   alphabet
//! - [`Moves`]: growable move sequences that round-trip through the
//!   compact move-string form
//! - [`Position`]: row/column coordinates and the solved-state mapping
//!
//! # Examples
//!
//! ```
//! use slidelace_core::{Board, Position};
//!
//! let mut board: Board = "1 2 3
//!                         4 5 0
//!                         6 7 8"
//!     .parse()?;
//! assert_eq!(board.locate(8), Position::new(2, 2));
//!
//! board.apply_moves("ld");
//! assert_eq!(board.blank(), Position::new(2, 1));
//! # Ok::<(), slidelace_core::ParseBoardError>(())
//! ```

pub use self::{
    board::{Board, ParseBoardError},
    direction::Direction,
    moves::{Moves, ParseMovesError},
    position::Position,
};

mod board;
mod direction;
mod moves;
mod position;
