//! Example demonstrating a scramble-and-solve round trip.
//!
//! This example shows how to:
//! - Build a solved board and scramble it with a seeded random walk
//! - Solve it back and print the move sequence
//! - Break the move count down by solving phase
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_scrambled
//! ```
//!
//! Pick the board shape and scramble:
//!
//! ```sh
//! cargo run --example solve_scrambled -- --height 5 --width 3 --steps 800 --seed 42
//! ```

use clap::Parser;
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;
use slidelace_core::Board;
use slidelace_solver::{solve_with_stats, testing};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board height in rows.
    #[arg(long, default_value_t = 4)]
    height: usize,

    /// Board width in columns.
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Number of random moves used to scramble the solved board.
    #[arg(long, default_value_t = 500)]
    steps: usize,

    /// Seed for the scramble.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut board = Board::solved(args.height, args.width);
    let mut rng = Pcg64Mcg::seed_from_u64(args.seed);
    testing::scramble(&mut board, args.steps, &mut rng);

    println!("Scrambled:");
    println!("{board}");
    println!();

    let (moves, stats) = solve_with_stats(&mut board);

    println!("Solved:");
    println!("{board}");
    println!();
    println!("Moves ({}):", moves.len());
    println!("  {moves}");
    println!();
    println!("Stats:");
    println!("  interior tiles: {}", stats.interior_tiles());
    println!("  column-0 tiles: {}", stats.column_zero_tiles());
    println!("  row-1 tiles: {}", stats.row_one_tiles());
    println!("  row-0 tiles: {}", stats.row_zero_tiles());
    println!("  total moves: {}", stats.total_moves());
}
