use crate::error::{BoardError, NotationError};
use crate::{notation, HEIGHT, WIDTH};

mod static_masks {
    use crate::{HEIGHT, WIDTH};

    pub const fn bottom_mask() -> u64 {
        let mut mask = 0;
        let mut column = 0;
        while column < WIDTH {
            mask |= 1 << (column * (HEIGHT + 1));
            column += 1;
        }
        mask
    }
    pub const fn full_board_mask() -> u64 {
        bottom_mask() * ((1 << HEIGHT as u64) - 1)
    }
}

/// One of the two players, `A` always moves first
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// Contents of a single tile
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerA,
    PlayerB,
    Empty,
}

/// A Connect 4 position packed into two bitmasks.
///
/// Each column takes `HEIGHT + 1` bits, the extra top bit is never set so that
/// shifted alignments can't carry from the top of one column into the bottom
/// of the next
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitBoard {
    // tiles of the first player
    bitmask_a: u64,
    // tiles of the second player
    bitmask_b: u64,
    column_heights: [usize; WIDTH],
    turn: Player,
    moves_played_a: u32,
    moves_played_b: u32,
}
impl BitBoard {
    pub fn new() -> Self {
        Self {
            bitmask_a: 0,
            bitmask_b: 0,
            column_heights: [0; WIDTH],
            turn: Player::A,
            moves_played_a: 0,
            moves_played_b: 0,
        }
    }

    /// Builds a position by replaying a one-based digit string, e.g. `"443"`
    pub fn from_notation<S: AsRef<str>>(moves: S) -> Result<Self, NotationError> {
        let mut board = Self::new();
        notation::load(&mut board, moves.as_ref())?;
        Ok(board)
    }

    /// Rebuilds a position from the tiles of each player alone.
    ///
    /// Heights, move counts and the turn are derived from the masks, nothing
    /// is checked, see [`check_invariants`](Self::check_invariants)
    pub fn from_bitmasks(bitmask_a: u64, bitmask_b: u64) -> Self {
        let mut column_heights = [0; WIDTH];
        for (column, height) in column_heights.iter_mut().enumerate() {
            *height = ((bitmask_a | bitmask_b) & Self::column_mask(column)).count_ones() as usize;
        }
        let moves_played_a = bitmask_a.count_ones();
        let moves_played_b = bitmask_b.count_ones();
        Self {
            bitmask_a,
            bitmask_b,
            column_heights,
            turn: if moves_played_a == moves_played_b {
                Player::A
            } else {
                Player::B
            },
            moves_played_a,
            moves_played_b,
        }
    }

    /// Clears the board back to the starting position
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn bitmask_a(&self) -> u64 {
        self.bitmask_a
    }

    pub fn bitmask_b(&self) -> u64 {
        self.bitmask_b
    }

    pub fn bitmask(&self, player: Player) -> u64 {
        match player {
            Player::A => self.bitmask_a,
            Player::B => self.bitmask_b,
        }
    }

    pub fn column_heights(&self) -> &[usize; WIDTH] {
        &self.column_heights
    }

    /// Number of tiles in `column`
    ///
    /// # Panics
    /// If `column` is not less than `WIDTH`
    pub fn column_height(&self, column: usize) -> usize {
        self.column_heights[column]
    }

    /// The player to move next
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn moves_played_a(&self) -> u32 {
        self.moves_played_a
    }

    pub fn moves_played_b(&self) -> u32 {
        self.moves_played_b
    }

    pub fn num_moves(&self) -> u32 {
        self.moves_played_a + self.moves_played_b
    }

    pub fn tile_mask(column: usize, row: usize) -> u64 {
        1 << (column * (HEIGHT + 1) + row)
    }

    pub fn column_mask(column: usize) -> u64 {
        ((1 << HEIGHT) - 1) << (column * (HEIGHT + 1))
    }

    pub fn cell(&self, column: usize, row: usize) -> Cell {
        let tile = Self::tile_mask(column, row);
        if self.bitmask_a & tile != 0 {
            Cell::PlayerA
        } else if self.bitmask_b & tile != 0 {
            Cell::PlayerB
        } else {
            Cell::Empty
        }
    }

    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.column_heights[column] < HEIGHT
    }

    /// Iterates over the columns with space left, left to right
    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&column| self.playable(column))
    }

    /// Drops a tile for the player to move into `column` (zero-indexed)
    pub fn apply_move(&mut self, column: usize) -> Result<(), BoardError> {
        if column >= WIDTH {
            return Err(BoardError::ColumnOutOfRange { column });
        }
        let height = self.column_heights[column];
        if height >= HEIGHT {
            return Err(BoardError::ColumnFull { column });
        }

        let move_bitmap = Self::tile_mask(column, height);
        match self.turn {
            Player::A => {
                self.bitmask_a |= move_bitmap;
                self.moves_played_a += 1;
            }
            Player::B => {
                self.bitmask_b |= move_bitmap;
                self.moves_played_b += 1;
            }
        }
        self.column_heights[column] += 1;
        self.turn = self.turn.other();
        Ok(())
    }

    /// Removes the top tile of `column`.
    ///
    /// Only valid as the inverse of the most recent unreverted `apply_move`,
    /// the board keeps no history to check this
    pub fn undo_move(&mut self, column: usize) -> Result<(), BoardError> {
        if column >= WIDTH {
            return Err(BoardError::ColumnOutOfRange { column });
        }
        let height = self.column_heights[column];
        if height == 0 {
            return Err(BoardError::ColumnEmpty { column });
        }

        // the tile belongs to whoever moved last
        self.turn = self.turn.other();
        let move_bitmap = Self::tile_mask(column, height - 1);
        match self.turn {
            Player::A => {
                self.bitmask_a &= !move_bitmap;
                self.moves_played_a -= 1;
            }
            Player::B => {
                self.bitmask_b &= !move_bitmap;
                self.moves_played_b -= 1;
            }
        }
        self.column_heights[column] -= 1;
        Ok(())
    }

    /// Whether a single player's tiles contain four in a row in any direction
    pub fn check_win(bitmask: u64) -> bool {
        // check diagonal alignment /
        // mark all diagonal runs of 2
        let mut m = bitmask & (bitmask >> (HEIGHT + 2));
        // check for runs of 2 * (runs of 2)
        if m & (m >> (2 * (HEIGHT + 2))) != 0 {
            return true;
        }

        // check diagonal alignment \
        m = bitmask & (bitmask >> HEIGHT);
        if m & (m >> (2 * HEIGHT)) != 0 {
            return true;
        }

        // check horizontal alignment
        m = bitmask & (bitmask >> (HEIGHT + 1));
        if m & (m >> (2 * (HEIGHT + 1))) != 0 {
            return true;
        }

        // check vertical alignment
        m = bitmask & (bitmask >> 1);
        if m & (m >> 2) != 0 {
            return true;
        }

        // no alignments
        false
    }

    pub fn check_full(&self) -> bool {
        self.num_moves() as usize == WIDTH * HEIGHT
    }

    pub fn winner(&self) -> Option<Player> {
        if Self::check_win(self.bitmask_a) {
            Some(Player::A)
        } else if Self::check_win(self.bitmask_b) {
            Some(Player::B)
        } else {
            None
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.check_full()
    }

    /// Checks every structural invariant of the position
    pub fn check_invariants(&self) -> bool {
        if self.bitmask_a & self.bitmask_b != 0 {
            return false;
        }
        // nothing outside the playable area, including the guard row
        let board_mask = self.bitmask_a | self.bitmask_b;
        if board_mask & !static_masks::full_board_mask() != 0 {
            return false;
        }
        // tiles stack contiguously from the bottom of each column
        for column in 0..WIDTH {
            let height = self.column_heights[column];
            if height > HEIGHT {
                return false;
            }
            let expected = ((1u64 << height) - 1) << (column * (HEIGHT + 1));
            if board_mask & Self::column_mask(column) != expected {
                return false;
            }
        }
        if self.moves_played_a != self.bitmask_a.count_ones()
            || self.moves_played_b != self.bitmask_b.count_ones()
        {
            return false;
        }
        if self.moves_played_a != self.moves_played_b
            && self.moves_played_a != self.moves_played_b + 1
        {
            return false;
        }
        (self.turn == Player::A) == (self.moves_played_a == self.moves_played_b)
    }
}

impl Default for BitBoard {
    fn default() -> Self {
        Self::new()
    }
}
