use slidelace_core::{Board, Moves, Position};

use crate::{invariant, walk};

// Rotates the tile parked at (target_row - 1, 1) into the column-0 cell
// below it without touching the already placed rows. Verbatim fixed cycle;
// it encodes a hand-verified permutation correction for exactly this
// parking spot.
const EDGE_CYCLE: &str = "ruldrdlurdluurddlur";

/// Places the column-0 tile of `target_row`, finishing that row.
///
/// Requires [`lower_row_invariant`](invariant::lower_row_invariant) at
/// `(target_row, 0)`; re-establishes it at
/// `(target_row - 1, width - 1)`, handing the blank to the row above.
///
/// The opening `ur` probe may drop the tile straight into place; if not,
/// the tile is parked one cell up-right of its home and rotated in with a
/// fixed cycle.
///
/// # Panics
///
/// Panics if `target_row < 2`; rows 0 and 1 belong to the top-strip
/// phases.
pub fn solve_col0_tile(board: &mut Board, target_row: usize) -> Moves {
    assert!(
        target_row > 1,
        "column-0 placement works below row 1, got row {target_row}"
    );
    debug_assert!(
        invariant::lower_row_invariant(board, target_row, 0),
        "lower row invariant must hold at ({target_row}, 0):\n{board}"
    );

    let home = Position::new(target_row, 0);
    let value = board.home_value(target_row, 0);
    let mut moves = Moves::new();

    walk::record(board, &mut moves, "ur");
    if board.locate(value) != home {
        moves.append(walk::position_tile(
            board,
            home,
            Position::new(target_row - 1, 1),
        ));
        debug_assert_eq!(
            board.blank(),
            Position::new(target_row - 1, 0),
            "blank must end left of the parked tile:\n{board}"
        );
        walk::record(board, &mut moves, EDGE_CYCLE);
    }

    let stride = board.width() - 1 - board.blank().col;
    for _ in 0..stride {
        walk::record(board, &mut moves, "r");
    }

    debug_assert!(
        invariant::lower_row_invariant(board, target_row - 1, board.width() - 1),
        "finishing row {target_row} must re-establish the invariant:\n{board}"
    );
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::PhaseTester;

    #[test]
    fn test_places_a_wandering_tile() {
        PhaseTester::from_rows(&[[1, 2, 6], [4, 5, 3], [0, 7, 8]])
            .step(|board| solve_col0_tile(board, 2))
            .assert_lower_row_invariant(1, 2);
    }

    #[test]
    fn test_probe_alone_can_finish_the_row() {
        PhaseTester::from_rows(&[[1, 2, 4], [6, 5, 3], [0, 7, 8]])
            .step(|board| solve_col0_tile(board, 2))
            .assert_lower_row_invariant(1, 2);
    }
}
