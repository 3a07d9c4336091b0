use anyhow::{anyhow, Result};

use crate::{HEIGHT, WIDTH};

/// The contents of a single board tile
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// The identity of a player's pieces
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Piece {
    PlayerOne,
    PlayerTwo,
}

impl Piece {
    pub fn opponent(self) -> Self {
        match self {
            Piece::PlayerOne => Piece::PlayerTwo,
            Piece::PlayerTwo => Piece::PlayerOne,
        }
    }

    /// The 1-based player number shown to users
    pub fn number(self) -> usize {
        match self {
            Piece::PlayerOne => 1,
            Piece::PlayerTwo => 2,
        }
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::PlayerOne => Cell::PlayerOne,
            Piece::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

impl PartialEq<Piece> for Cell {
    fn eq(&self, piece: &Piece) -> bool {
        *self == Cell::from(*piece)
    }
}

/// A 6x7 Connect 4 grid under gravity
///
/// Row 0 is the top of the board and row `HEIGHT - 1` the bottom, so pieces
/// fall towards higher row indices. Cells can only be written through
/// [`drop_piece`](Board::drop_piece) and cleared through
/// [`remove_piece`](Board::remove_piece), which keeps every empty cell of a
/// column above every filled one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Builds a board from a string of 1-indexed column digits, alternating
    /// pieces starting with player one
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut piece = Piece::PlayerOne;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board.play_checked(column, piece)?;
                    piece = piece.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    fn assert_column(column: usize) {
        assert!(
            column < WIDTH,
            "column {} out of range, columns must be below {}",
            column,
            WIDTH
        );
    }

    /// # Panics
    /// Panics if `row` is not below `HEIGHT` or `column` is not below `WIDTH`
    pub fn get(&self, row: usize, column: usize) -> Cell {
        assert!(
            row < HEIGHT,
            "row {} out of range, rows must be below {}",
            row,
            HEIGHT
        );
        Self::assert_column(column);
        self.cells[row][column]
    }

    /// Returns true if a piece can still be dropped into `column`
    ///
    /// # Panics
    /// Panics if `column` is not below `WIDTH`
    pub fn is_valid_column(&self, column: usize) -> bool {
        Self::assert_column(column);
        self.cells[0][column].is_empty()
    }

    /// The columns that can still be played, in ascending order
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&c| self.is_valid_column(c)).collect()
    }

    /// The lowest empty row of `column`, or `None` if the column is full
    ///
    /// # Panics
    /// Panics if `column` is not below `WIDTH`
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        Self::assert_column(column);
        (0..HEIGHT).rev().find(|&row| self.cells[row][column].is_empty())
    }

    /// Drops `piece` into `column`, returning false without changing the
    /// board if the column is full
    ///
    /// # Panics
    /// Panics if `column` is not below `WIDTH`
    pub fn drop_piece(&mut self, column: usize, piece: Piece) -> bool {
        self.play(column, piece).is_some()
    }

    /// Drops `piece` into `column` and returns the row it landed in
    pub fn play(&mut self, column: usize, piece: Piece) -> Option<usize> {
        let row = self.next_open_row(column)?;
        self.cells[row][column] = piece.into();
        Some(row)
    }

    /// Plays a 1-indexed column from user input, returning the row the
    /// piece landed in
    pub fn play_checked(&mut self, column_one_indexed: usize, piece: Piece) -> Result<usize> {
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        self.play(column_one_indexed - 1, piece)
            .ok_or_else(|| anyhow!("Invalid move, column {} full", column_one_indexed))
    }

    /// Clears the topmost piece of `column`, the inverse of [`play`](Board::play)
    ///
    /// Returns the row that was cleared, or `None` if the column was empty
    pub fn remove_piece(&mut self, column: usize) -> Option<usize> {
        Self::assert_column(column);
        let row = (0..HEIGHT).find(|&row| !self.cells[row][column].is_empty())?;
        self.cells[row][column] = Cell::Empty;
        Some(row)
    }

    /// Returns true if every column is full
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    /// The draw condition, only meaningful once neither piece has won
    pub fn is_draw(&self) -> bool {
        self.is_full()
    }

    pub fn num_pieces(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// The cells of `column` from top to bottom
    pub fn column(&self, column: usize) -> [Cell; HEIGHT] {
        Self::assert_column(column);
        let mut cells = [Cell::Empty; HEIGHT];
        for (row, cell) in cells.iter_mut().enumerate() {
            *cell = self.cells[row][column];
        }
        cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
