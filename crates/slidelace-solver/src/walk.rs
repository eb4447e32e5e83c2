//! Blank and tile routing shared by the phase solvers.
//!
//! The phase solvers never plan paths; they compose two primitives. One
//! walks the blank alone to a destination. The other walks a chosen tile
//! toward its destination by repeating short fixed cycles in which the
//! blank orbits the tile, each cycle shifting the tile by exactly one
//! cell and parking the blank back on its left.

use slidelace_core::{Board, Direction, Moves, Position};

// Each horizontal cycle shifts the target one column and returns the blank
// to the tile's left. The `_TOP` variants orbit through the row below
// instead of the row above, for tiles sitting in row 0.
const SHIFT_LEFT: &str = "rulld";
const SHIFT_LEFT_TOP: &str = "rdllu";
const SHIFT_RIGHT: &str = "urrdl";
const SHIFT_RIGHT_TOP: &str = "drrul";
// Shifts the target one row down, keeping the blank on its left.
const SHIFT_DOWN: &str = "druld";

/// Applies a move cycle to the board and appends it to `moves`.
pub(crate) fn record(board: &mut Board, moves: &mut Moves, cycle: &str) {
    for symbol in cycle.chars() {
        let direction = Direction::from_char(symbol);
        board.slide(direction);
        moves.push(direction);
    }
}

/// Walks the blank alone to `dest`: up, down, left, then right.
///
/// Tiles passed over along the way are displaced by one cell; callers rely
/// on the fixed up/down/left/right order to know which ones.
pub(crate) fn move_blank_to(board: &mut Board, dest: Position) -> Moves {
    let mut moves = Moves::new();
    while board.blank().row > dest.row {
        record(board, &mut moves, "u");
    }
    while board.blank().row < dest.row {
        record(board, &mut moves, "d");
    }
    while board.blank().col > dest.col {
        record(board, &mut moves, "l");
    }
    while board.blank().col < dest.col {
        record(board, &mut moves, "r");
    }
    moves
}

/// Moves the tile whose solved-state cell is `home` to `dest`, leaving the
/// blank at `(dest.row, dest.col - 1)`.
///
/// The blank first walks up and sideways to meet the tile, then drives it
/// column by column and row by row with the shift cycles. Cells below
/// `dest.row` and cells right of `dest.col` in reached rows are never
/// disturbed, which is what lets the phases preserve their invariants.
pub(crate) fn position_tile(board: &mut Board, home: Position, dest: Position) -> Moves {
    let value = board.home_value(home.row, home.col);
    let mut moves = Moves::new();

    // Meet the tile: climb to its row, then close in horizontally. When
    // the blank starts right of the tile it walks onto it, nudging the
    // tile one column right; the loop conditions re-locate every step.
    while board.blank().row > board.locate(value).row {
        record(board, &mut moves, "u");
    }
    while board.blank().col > board.locate(value).col {
        record(board, &mut moves, "l");
    }
    while board.blank().col + 1 < board.locate(value).col {
        record(board, &mut moves, "r");
    }
    // A same-column approach leaves the blank directly above the tile;
    // tuck it around to the tile's left.
    if board.blank().row < board.locate(value).row {
        record(board, &mut moves, "ld");
    }
    debug_assert_eq!(
        board.locate(value).col,
        board.blank().col + 1,
        "blank must sit directly left of tile {value}:\n{board}"
    );

    while board.locate(value).col > dest.col {
        let cycle = if board.locate(value).row == 0 {
            SHIFT_LEFT_TOP
        } else {
            SHIFT_LEFT
        };
        record(board, &mut moves, cycle);
    }
    while board.locate(value).col < dest.col {
        let cycle = if board.locate(value).row == 0 {
            SHIFT_RIGHT_TOP
        } else {
            SHIFT_RIGHT
        };
        record(board, &mut moves, cycle);
    }
    while board.locate(value).row < dest.row {
        record(board, &mut moves, SHIFT_DOWN);
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_blank_to_visits_rows_before_columns() {
        let mut board = Board::solved(3, 3);
        let moves = move_blank_to(&mut board, Position::new(2, 2));
        assert_eq!(board.blank(), Position::new(2, 2));
        assert_eq!(moves.to_string(), "ddrr");
    }

    #[test]
    fn test_position_tile_leaves_the_blank_left_of_dest() {
        // Tile 8 starts in the opposite corner of its destination.
        let mut board = Board::from_rows(&[[8, 2, 6], [4, 5, 3], [1, 7, 0]]);
        let dest = Position::new(2, 2);
        position_tile(&mut board, Position::new(2, 2), dest);
        assert_eq!(board.locate(8), dest);
        assert_eq!(board.blank(), Position::new(2, 1));
    }

    #[test]
    fn test_position_tile_handles_a_tile_directly_above() {
        let mut board = Board::from_rows(&[[1, 2, 8], [4, 5, 3], [6, 7, 0]]);
        position_tile(&mut board, Position::new(2, 2), Position::new(2, 2));
        assert_eq!(board.locate(8), Position::new(2, 2));
        assert_eq!(board.blank(), Position::new(2, 1));
    }

    #[test]
    fn test_position_tile_handles_a_tile_directly_left() {
        let mut board = Board::from_rows(&[[1, 2, 6], [4, 5, 3], [8, 7, 0]]);
        position_tile(&mut board, Position::new(2, 2), Position::new(2, 2));
        assert_eq!(board.locate(8), Position::new(2, 2));
        assert_eq!(board.blank(), Position::new(2, 1));
    }
}
