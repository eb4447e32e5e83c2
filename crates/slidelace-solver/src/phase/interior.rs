use slidelace_core::{Board, Moves, Position};

use crate::{invariant, walk};

/// Places the tile belonging at `(target_row, target_col)` for a target
/// strictly below row 1 and outside column 0.
///
/// Requires [`lower_row_invariant`](invariant::lower_row_invariant) at
/// `(target_row, target_col)`; re-establishes it at
/// `(target_row, target_col - 1)`, handing the blank to the next target.
///
/// # Panics
///
/// Panics if `target_row < 2` or `target_col == 0`; those tiles belong to
/// the column-0 and top-strip phases.
pub fn solve_interior_tile(board: &mut Board, target_row: usize, target_col: usize) -> Moves {
    assert!(
        target_row > 1,
        "interior tiles sit below row 1, got row {target_row}"
    );
    assert!(target_col > 0, "column 0 has its own phase");
    debug_assert!(
        invariant::lower_row_invariant(board, target_row, target_col),
        "lower row invariant must hold at ({target_row}, {target_col}):\n{board}"
    );

    let home = Position::new(target_row, target_col);
    let moves = walk::position_tile(board, home, home);

    debug_assert!(
        invariant::lower_row_invariant(board, target_row, target_col - 1),
        "placing ({target_row}, {target_col}) must re-establish the invariant:\n{board}"
    );
    moves
}
