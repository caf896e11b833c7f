//! Error kinds raised by the board and by the notation reader/writer

use crate::WIDTH;

/// Misuse of [`BitBoard`](crate::bitboard::BitBoard) move application.
///
/// These indicate a logic defect in the caller, the search never triggers them
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cannot play in column {}, column is full", .column + 1)]
    ColumnFull { column: usize },

    #[error("cannot undo in column {}, column is empty", .column + 1)]
    ColumnEmpty { column: usize },

    #[error("column {} out of range, columns must be between 1 and {}", .column + 1, WIDTH)]
    ColumnOutOfRange { column: usize },
}

/// Rejected input or output of the move-sequence notation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("could not parse '{found}' at position {position} as a column between 1 and {}", WIDTH)]
    InvalidColumn { position: usize, found: char },

    #[error("too many tiles in column {column}")]
    ColumnOverflow { column: usize },

    #[error("uneven moves, player 1 has {player_a} tiles and player 2 has {player_b}")]
    UnevenMoves { player_a: u32, player_b: u32 },
}
