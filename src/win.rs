//! Enumeration of four-cell windows and detection of winning alignments

use crate::{
    board::{Board, Cell, Piece},
    HEIGHT, WIDTH, WINDOW_LENGTH,
};

/// A `(row, column)` coordinate on the board
pub type Position = (usize, usize);

/// Four collinear coordinates holding the same piece, in scan order
pub type WinLine = [Position; WINDOW_LENGTH];

/// The four directions a window can run in, in the order they are scanned
///
/// Rows grow downwards, so `Diagonal` runs towards the bottom right and
/// `AntiDiagonal` towards the top right.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// `(row, column)` step between consecutive cells of a window
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (-1, 1),
        }
    }

    /// The rows a window in this direction may start on
    fn start_rows(self) -> std::ops::Range<usize> {
        match self {
            Direction::Horizontal => 0..HEIGHT,
            Direction::Vertical | Direction::Diagonal => 0..HEIGHT + 1 - WINDOW_LENGTH,
            Direction::AntiDiagonal => WINDOW_LENGTH - 1..HEIGHT,
        }
    }

    /// The columns a window in this direction may start on
    fn start_columns(self) -> std::ops::Range<usize> {
        match self {
            Direction::Vertical => 0..WIDTH,
            _ => 0..WIDTH + 1 - WINDOW_LENGTH,
        }
    }

    /// Every window in this direction, top-to-bottom then left-to-right
    pub fn windows(self) -> impl Iterator<Item = WinLine> {
        let (d_row, d_column) = self.step();
        let columns = self.start_columns();
        self.start_rows().flat_map(move |row| {
            columns.clone().map(move |column| {
                let mut window = [(0, 0); WINDOW_LENGTH];
                for (i, position) in window.iter_mut().enumerate() {
                    *position = (
                        (row as isize + d_row * i as isize) as usize,
                        (column as isize + d_column * i as isize) as usize,
                    );
                }
                window
            })
        })
    }
}

/// Every window on the board, direction by direction
pub fn windows() -> impl Iterator<Item = WinLine> {
    let directions: &'static [Direction] = &Direction::ALL;
    directions.iter().flat_map(|direction| direction.windows())
}

/// The cells covered by `window`
pub fn window_cells(board: &Board, window: &WinLine) -> [Cell; WINDOW_LENGTH] {
    let mut cells = [Cell::Empty; WINDOW_LENGTH];
    for (cell, &(row, column)) in cells.iter_mut().zip(window.iter()) {
        *cell = board.get(row, column);
    }
    cells
}

/// Finds the first window filled entirely with `piece`
///
/// Directions are scanned horizontal, vertical, diagonal then anti-diagonal,
/// and the first alignment found is returned for highlighting.
pub fn check_winner(board: &Board, piece: Piece) -> Option<WinLine> {
    windows().find(|window| {
        window
            .iter()
            .all(|&(row, column)| board.get(row, column) == piece)
    })
}

/// Returns true if `piece` has four in a row anywhere on the board
pub fn has_won(board: &Board, piece: Piece) -> bool {
    check_winner(board, piece).is_some()
}
