//! Heuristic scoring of non-terminal positions

use anyhow::{anyhow, Result};

use crate::{
    board::{Board, Cell, Piece},
    win::{window_cells, windows},
    WIDTH, WINDOW_LENGTH,
};

/// Points awarded for each kind of window, plus the center column bonus
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Weights {
    /// A window holding four of the scored piece
    pub four: i32,
    /// Three of the scored piece and one empty cell
    pub three: i32,
    /// Two of the scored piece and two empty cells
    pub two: i32,
    /// Three opponent pieces and one empty cell, normally negative
    pub opponent_three: i32,
    /// Per scored piece in the middle column
    pub center: i32,
}

impl Weights {
    /// Treats an open opponent three as seriously as a completed four
    pub const BLOCKING: Weights = Weights {
        four: 100,
        three: 10,
        two: 5,
        opponent_three: -100,
        center: 3,
    };

    /// Lighter weights with a mild penalty for opponent threes
    pub const BALANCED: Weights = Weights {
        four: 100,
        three: 5,
        two: 2,
        opponent_three: -4,
        center: 3,
    };

    pub const PRESETS: [(&str, Weights); 2] =
        [("blocking", Weights::BLOCKING), ("balanced", Weights::BALANCED)];

    /// Looks up a named preset, ignoring case
    pub fn preset(name: &str) -> Result<Self> {
        let name = name.trim().to_lowercase();
        Self::PRESETS
            .iter()
            .find(|(preset, _)| *preset == name)
            .map(|&(_, weights)| weights)
            .ok_or_else(|| {
                anyhow!(
                    "unknown weight preset '{}', expected one of: {}",
                    name,
                    Self::PRESETS
                        .iter()
                        .map(|(preset, _)| *preset)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

impl Default for Weights {
    fn default() -> Self {
        Weights::BLOCKING
    }
}

/// Scores positions from one piece's point of view
#[derive(Copy, Clone, Debug, Default)]
pub struct Evaluator {
    weights: Weights,
}

impl Evaluator {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Scores a single window of cells for `piece`
    pub fn score_window(&self, window: &[Cell; WINDOW_LENGTH], piece: Piece) -> i32 {
        let own = window.iter().filter(|&&cell| cell == piece).count();
        let opponent = window
            .iter()
            .filter(|&&cell| cell == piece.opponent())
            .count();
        let empty = WINDOW_LENGTH - own - opponent;

        let mut score = match (own, empty) {
            (4, _) => self.weights.four,
            (3, 1) => self.weights.three,
            (2, 2) => self.weights.two,
            _ => 0,
        };
        if opponent == 3 && empty == 1 {
            score += self.weights.opponent_three;
        }
        score
    }

    /// Scores a non-terminal board for `piece`
    ///
    /// The total is the center column bonus plus the score of every window
    /// in all four directions. Terminal boards are scored by the search
    /// itself and never reach this function.
    pub fn score_position(&self, board: &Board, piece: Piece) -> i32 {
        let center_count = board
            .column(WIDTH / 2)
            .iter()
            .filter(|&&cell| cell == piece)
            .count() as i32;
        let mut score = center_count * self.weights.center;

        for window in windows() {
            score += self.score_window(&window_cells(board, &window), piece);
        }
        score
    }
}
