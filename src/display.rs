use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{board::*, win::WinLine, HEIGHT, WIDTH};

/// Draws the board with 1-indexed column labels, highlighting the cells of
/// `win_line` if one is given
pub fn draw(board: &Board, win_line: Option<&WinLine>) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style("\n".to_string() + &cols + "\n")))?;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let highlighted = win_line.map_or(false, |line| line.contains(&(row, column)));
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(if highlighted {
                        Color::Green
                    } else {
                        Color::DarkBlue
                    })
                    .with(match board.get(row, column) {
                        Cell::PlayerOne => Color::Red,
                        Cell::PlayerTwo => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
