use anyhow::{anyhow, Result};

use std::cmp::Ordering;
use std::env;

use connect4_minimax::{
    benchmark, bitboard::*, display, notation, solver::*, HEIGHT, MAX_DEPTH, WIDTH,
};

const DEFAULT_NOTATION: &str = "443";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let moves = args.next().unwrap_or_else(|| DEFAULT_NOTATION.to_string());
    let depth = match args.next() {
        Some(depth) => depth
            .parse::<usize>()
            .map_err(|_| anyhow!("could not parse '{}' as a search depth", depth))?,
        None => MAX_DEPTH,
    };

    let mut board = BitBoard::from_notation(&moves)?;
    println!("Loaded original notation: \"{}\"", moves);
    println!("Reconstructed notation: \"{}\"", notation::export(&board)?);
    println!();

    println!("Current board state:");
    print!("{}", board);
    println!();
    display::draw(&board)?;
    println!();

    println!("Player 1 has made {} moves.", board.moves_played_a());
    println!("Player 2 has made {} moves.", board.moves_played_b());
    let last_column = moves
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .map(|c| c as usize - 1);
    if let Some(column) = last_column {
        println!("The last move was played in column {}.", column + 1);
    }
    let player = if board.turn() == Player::A { 1 } else { 2 };
    println!("It is Player {}'s turn.", player);
    println!();

    let heights: Vec<String> = board.column_heights().iter().map(|h| h.to_string()).collect();
    println!("Stack heights: {}", heights.join(", "));
    let valid: Vec<String> = board
        .playable_columns()
        .map(|c| (c + 1).to_string())
        .collect();
    println!("Valid moves: {}", valid.join(", "));
    println!();

    println!(
        "Player 1 bitboard: {:0width$b}",
        board.bitmask_a(),
        width = WIDTH * HEIGHT
    );
    println!(
        "Player 2 bitboard: {:0width$b}",
        board.bitmask_b(),
        width = WIDTH * HEIGHT
    );
    println!();

    println!("Player 1 has won: {}", BitBoard::check_win(board.bitmask_a()));
    println!("Player 2 has won: {}", BitBoard::check_win(board.bitmask_b()));
    println!();

    println!("Searching {} plies...", depth);
    let mut solver = Solver::new(&mut board).with_depth(depth);
    let scores = solver.root_search();
    for &(column, score) in scores.iter() {
        println!("Column {}: {}", column + 1, score);
    }
    match pick_best(&scores, solver.board().turn()) {
        Some((column, score)) => {
            match score.cmp(&0) {
                Ordering::Greater => println!("Player 1 can force a win."),
                Ordering::Less => println!("Player 2 can force a win."),
                Ordering::Equal => println!("No forced win within {} plies.", depth),
            }
            println!("Best move: {}", column + 1);
        }
        None => println!("The game is over."),
    }
    println!("Searched {} positions.", solver.node_count);
    println!();

    if let Some(column) = last_column {
        for (description, timing) in benchmark::run_standard(&mut board, column, true)? {
            println!("{} in {:.2} ms", description, timing.millis());
        }
    }
    Ok(())
}
