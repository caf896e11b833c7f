//! A depth-limited game tree search for analysing the board game 'Connect 4'
//!
//! Positions are stored as a pair of bitmasks, one per player, which makes
//! applying, undoing and checking moves constant time. The solver performs a
//! plain alpha-beta minimax search over the board in place, scoring every
//! legal drop from the current position by how quickly a win can be forced.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{bitboard::BitBoard, solver::Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = BitBoard::from_notation("4455")?;
//! let mut solver = Solver::new(&mut board).with_depth(3);
//!
//! // the first player completes four in a row on either side
//! let (column, score) = solver.best_move().unwrap();
//! assert_eq!((column, score), (2, 39));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod bitboard;

pub mod notation;

pub mod solver;

pub mod display;

pub mod benchmark;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The default number of plies searched from the root position
pub const MAX_DEPTH: usize = 8;

/// Position score, positive when the first player is winning
pub type Score = i32;

/// Offset that win scores are measured from.
///
/// Larger than any number of tiles a single player can place, so that every
/// win scores strictly away from a drawn or unresolved position
pub const WIN_BONUS: Score = (WIDTH * HEIGHT) as Score + 1;

/// Stand-in for infinity in the alpha-beta window, outside the reachable score range
pub const SCORE_BOUND: Score = 1_000_000;

// ensure that the given dimensions fit in a u64 for the bitboard representation
const_assert!(WIDTH * (HEIGHT + 1) <= 64);
// four in a row must fit on the board at all
const_assert!(WIDTH >= 4 || HEIGHT >= 4);
// a player places at most half the tiles (rounded up)
const_assert!(WIN_BONUS > ((WIDTH * HEIGHT + 1) / 2) as Score);
const_assert!(SCORE_BOUND > WIN_BONUS);
