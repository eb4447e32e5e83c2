use slidelace_core::{Board, Moves, Position};

use crate::{invariant, walk};

// Rotates the tile parked at (1, target_col - 1) up into its row-0 cell.
// Verbatim fixed cycle; it encodes a hand-verified permutation correction
// for exactly this parking spot.
const EDGE_CYCLE: &str = "urdlurrdluldrruld";

/// Places the row-0 tile of `target_col`, finishing that column of the
/// top strip.
///
/// Requires [`row0_invariant`](invariant::row0_invariant) at `target_col`;
/// establishes [`row1_invariant`](invariant::row1_invariant) at
/// `target_col - 1`, handing the blank to the next column pair.
///
/// The opening `ld` probe may drop the tile straight into place; if not,
/// the tile is parked one cell down-left of its home and rotated in with a
/// fixed cycle.
///
/// # Panics
///
/// Panics if `target_col < 2`; columns 0 and 1 belong to the final 2×2
/// phase.
pub fn solve_row0_tile(board: &mut Board, target_col: usize) -> Moves {
    assert!(
        target_col > 1,
        "columns 0 and 1 are left to the 2x2 phase, got column {target_col}"
    );
    debug_assert!(
        invariant::row0_invariant(board, target_col),
        "row-0 invariant must hold at column {target_col}:\n{board}"
    );

    let home = Position::new(0, target_col);
    let value = board.home_value(0, target_col);
    let mut moves = Moves::new();

    walk::record(board, &mut moves, "ld");
    if board.locate(value) != home {
        moves.append(walk::position_tile(
            board,
            home,
            Position::new(1, target_col - 1),
        ));
        walk::record(board, &mut moves, EDGE_CYCLE);
    }

    debug_assert_eq!(
        board.blank(),
        Position::new(1, target_col - 1),
        "blank must end below the next row-0 target:\n{board}"
    );
    debug_assert!(
        invariant::row1_invariant(board, target_col - 1),
        "placing (0, {target_col}) must re-establish the row-1 invariant:\n{board}"
    );
    moves
}
