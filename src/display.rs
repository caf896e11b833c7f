//! Rendering of positions, as plain text or in colour on the terminal

use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::fmt;
use std::io::{stdout, Write};

use crate::bitboard::{BitBoard, Cell};
use crate::{HEIGHT, WIDTH};

impl Cell {
    /// Text marker used when printing a board
    pub fn marker(self) -> char {
        match self {
            Cell::PlayerA => 'x',
            Cell::PlayerB => 'o',
            Cell::Empty => '.',
        }
    }
}

// top row first, one marker per tile
impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            for column in 0..WIDTH {
                write!(f, "{} ", self.cell(column, row).marker())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Draws the board to stdout with coloured tiles and column numbers
pub fn draw(board: &BitBoard) -> crossterm::Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    for row in (0..HEIGHT).rev() {
        for column in 0..WIDTH {
            let cell = board.cell(column, row);
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match cell {
                        Cell::PlayerA => Color::Red,
                        Cell::PlayerB => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
