use slidelace_core::{Board, Moves, Position};

use crate::{invariant, walk};

/// Places the row-1 tile of `target_col` and parks the blank in row 0.
///
/// Requires [`row1_invariant`](invariant::row1_invariant) at `target_col`;
/// establishes [`row0_invariant`](invariant::row0_invariant) there, ready
/// for [`solve_row0_tile`](crate::solve_row0_tile).
///
/// # Panics
///
/// Panics if `target_col < 2`; columns 0 and 1 belong to the final 2×2
/// phase.
pub fn solve_row1_tile(board: &mut Board, target_col: usize) -> Moves {
    assert!(
        target_col > 1,
        "columns 0 and 1 are left to the 2x2 phase, got column {target_col}"
    );
    debug_assert!(
        invariant::row1_invariant(board, target_col),
        "row-1 invariant must hold at column {target_col}:\n{board}"
    );

    let home = Position::new(1, target_col);
    let mut moves = walk::position_tile(board, home, home);
    walk::record(board, &mut moves, "ur");

    debug_assert!(
        invariant::row0_invariant(board, target_col),
        "placing (1, {target_col}) must establish the row-0 invariant:\n{board}"
    );
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::PhaseTester;

    #[test]
    fn test_tile_in_the_row_above() {
        PhaseTester::from_rows(&[
            [6, 1, 2, 3],
            [4, 5, 0, 7],
            [8, 9, 10, 11],
            [12, 13, 14, 15],
        ])
        .assert_row1_invariant(2)
        .step(|board| solve_row1_tile(board, 2))
        .assert_row0_invariant(2);
    }

    #[test]
    fn test_tile_further_along_the_row() {
        PhaseTester::from_rows(&[
            [4, 1, 2, 3],
            [6, 5, 0, 7],
            [8, 9, 10, 11],
            [12, 13, 14, 15],
        ])
        .assert_row1_invariant(2)
        .step(|board| solve_row1_tile(board, 2))
        .assert_row0_invariant(2);
    }
}
