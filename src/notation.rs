//! Plain digit-string notation for positions, one 1-based column per move
//!
//! `"443"` means the first player drops in column 4, the second player drops
//! on top of it, then the first player drops in column 3.

use crate::bitboard::{BitBoard, Player};
use crate::error::NotationError;
use crate::{HEIGHT, WIDTH};

/// Resets `board` and replays `moves` onto it.
///
/// The caller's board is only replaced once the whole sequence is known to be
/// valid, a rejected sequence leaves it untouched
pub fn load(board: &mut BitBoard, moves: &str) -> Result<(), NotationError> {
    let mut replay = BitBoard::new();

    for (position, column_char) in moves.chars().enumerate() {
        let column = match column_char.to_digit(10).map(|c| c as usize) {
            Some(column @ 1..=WIDTH) => column - 1,
            _ => {
                return Err(NotationError::InvalidColumn {
                    position,
                    found: column_char,
                })
            }
        };
        // the only way a checked column can fail is by being full
        if replay.apply_move(column).is_err() {
            return Err(NotationError::ColumnOverflow { column: column + 1 });
        }
    }

    *board = replay;
    Ok(())
}

/// Reconstructs a move sequence that leads to the tiles on `board`.
///
/// The history is not stored, so each player's tiles are listed bottom row
/// first, left to right, and the two lists are interleaved. This is one
/// order that produces the position, not necessarily the order that was played
pub fn export(board: &BitBoard) -> Result<String, NotationError> {
    let mut moves_a = Vec::new();
    let mut moves_b = Vec::new();

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let tile = BitBoard::tile_mask(column, row);
            if board.bitmask(Player::A) & tile != 0 {
                moves_a.push(column + 1);
            } else if board.bitmask(Player::B) & tile != 0 {
                moves_b.push(column + 1);
            }
        }
    }

    let (count_a, count_b) = (moves_a.len(), moves_b.len());
    if count_b > count_a || count_a > count_b + 1 {
        return Err(NotationError::UnevenMoves {
            player_a: count_a as u32,
            player_b: count_b as u32,
        });
    }

    let mut notation = String::with_capacity(count_a + count_b);
    for (i, column) in moves_a.iter().enumerate() {
        notation.push_str(&column.to_string());
        if let Some(column) = moves_b.get(i) {
            notation.push_str(&column.to_string());
        }
    }
    Ok(notation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_input_keeps_board() {
        let mut board = BitBoard::from_notation("44").unwrap();
        let before = board;

        assert_eq!(
            load(&mut board, "12x"),
            Err(NotationError::InvalidColumn {
                position: 2,
                found: 'x'
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn zero_is_not_a_column() {
        assert!(matches!(
            BitBoard::from_notation("0"),
            Err(NotationError::InvalidColumn { position: 0, found: '0' })
        ));
    }
}
