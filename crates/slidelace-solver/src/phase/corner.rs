use slidelace_core::{Board, Moves, Position};

use crate::walk;

/// Solves the final top-left 2×2 block.
///
/// Requires the blank inside the block and everything outside it placed.
/// Walks the blank home to `(0, 0)`; if the block is not yet solved, the
/// remaining three tiles form a single 3-cycle, and one four-move rotation
/// orders them.
///
/// # Panics
///
/// Panics if the blank starts outside the 2×2 block, or if the block
/// cannot be ordered, which only happens on an unsolvable configuration.
pub fn solve_2x2(board: &mut Board) -> Moves {
    let blank = board.blank();
    assert!(
        blank.row < 2 && blank.col < 2,
        "blank must start inside the 2x2 corner, found it at {blank}"
    );

    let mut moves = walk::move_blank_to(board, Position::new(0, 0));
    if !board.region_solved(2, 2) {
        let cycle = match board.locate(1) {
            Position { row: 1, col: 0 } => "drul",
            Position { row: 1, col: 1 } => "rdlu",
            home => panic!("corner cannot be ordered: tile 1 already at {home}:\n{board}"),
        };
        walk::record(board, &mut moves, cycle);
    }

    debug_assert!(
        board.region_solved(2, 2),
        "corner rotation must finish the board:\n{board}"
    );
    moves
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{self, PhaseTester};

    #[test]
    fn test_already_solved_corner_needs_no_moves() {
        let mut board = Board::from_rows(&[[0, 1], [2, 3]]);
        let moves = solve_2x2(&mut board);
        assert!(moves.is_empty());
        assert!(board.is_solved());
    }

    #[test]
    fn test_rotates_clockwise_when_tile_one_is_below_home() {
        let mut board = Board::from_rows(&[[0, 3], [1, 2]]);
        let moves = solve_2x2(&mut board);
        assert_eq!(moves.to_string(), "drul");
        assert!(board.is_solved());
    }

    #[test]
    fn test_rotates_counterclockwise_when_tile_one_is_opposite_home() {
        let mut board = Board::from_rows(&[[0, 2], [3, 1]]);
        let moves = solve_2x2(&mut board);
        assert_eq!(moves.to_string(), "rdlu");
        assert!(board.is_solved());
    }

    #[test]
    fn test_solves_a_scrambled_2x2() {
        let mut board = Board::solved(2, 2);
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        testing::scramble(&mut board, 10, &mut rng);

        PhaseTester::new(board)
            .step(solve_2x2)
            .assert_region_solved(2, 2);
    }
}
