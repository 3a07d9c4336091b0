//! AI-vs-AI games for comparing engine configurations

use anyhow::{anyhow, Result};
use indicatif::*;
use rayon::prelude::*;

use std::fmt;

use crate::{
    board::{Board, Piece},
    config::EngineConfig,
    search::SearchEngine,
    win::{check_winner, WinLine},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Piece),
    Draw,
}

/// A finished game between two engines
#[derive(Clone, Debug)]
pub struct GameRecord {
    /// Zero-indexed columns in the order they were played
    pub moves: Vec<usize>,
    pub outcome: Outcome,
    pub win_line: Option<WinLine>,
    pub board: Board,
}

impl GameRecord {
    /// The moves as a string of 1-indexed column digits, as accepted by
    /// [`Board::from_moves`]
    pub fn move_string(&self) -> String {
        self.moves.iter().map(|column| (column + 1).to_string()).collect()
    }
}

/// Plays one game to completion, player one moving first
///
/// The `ai_piece` of each config is overridden to match its seat.
pub fn play_game(player_one: &EngineConfig, player_two: &EngineConfig) -> Result<GameRecord> {
    let mut engines = [
        SearchEngine::from_config(&EngineConfig {
            ai_piece: Piece::PlayerOne,
            ..*player_one
        }),
        SearchEngine::from_config(&EngineConfig {
            ai_piece: Piece::PlayerTwo,
            ..*player_two
        }),
    ];

    let mut board = Board::new();
    let mut moves = Vec::new();
    let mut turn = 0;

    loop {
        let engine = &mut engines[turn % 2];
        let piece = engine.ai_piece();
        let column = engine.choose_column(&board)?;
        if !board.drop_piece(column, piece) {
            return Err(anyhow!(
                "engine for player {} chose full column {}",
                piece.number(),
                column + 1
            ));
        }
        moves.push(column);

        if let Some(win_line) = check_winner(&board, piece) {
            return Ok(GameRecord {
                moves,
                outcome: Outcome::Win(piece),
                win_line: Some(win_line),
                board,
            });
        }
        if board.is_draw() {
            return Ok(GameRecord {
                moves,
                outcome: Outcome::Draw,
                win_line: None,
                board,
            });
        }
        turn += 1;
    }
}

/// Results of a match between two configurations, `a` and `b`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub games: usize,
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: A won {}, B won {}, {} drawn",
            self.games, self.a_wins, self.b_wins, self.draws
        )
    }
}

/// Plays `games` games between `a` and `b` in parallel
///
/// Seats alternate so `a` moves first in even-numbered games. Every engine
/// is seeded from `seed` and the game number, so a match is repeatable.
pub fn run_match(
    a: &EngineConfig,
    b: &EngineConfig,
    games: usize,
    seed: u64,
    show_progress: bool,
) -> Result<MatchReport> {
    let progress = if show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let results = (0..games)
        .into_par_iter()
        .map(|game| -> Result<Option<bool>> {
            let a = a.with_seed(seed.wrapping_add(2 * game as u64));
            let b = b.with_seed(seed.wrapping_add(2 * game as u64 + 1));
            let a_first = game % 2 == 0;

            let record = if a_first {
                play_game(&a, &b)?
            } else {
                play_game(&b, &a)?
            };
            progress.inc(1);

            Ok(match record.outcome {
                Outcome::Draw => None,
                Outcome::Win(piece) => Some((piece == Piece::PlayerOne) == a_first),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    progress.finish();

    let mut report = MatchReport {
        games,
        ..MatchReport::default()
    };
    for result in results {
        match result {
            Some(true) => report.a_wins += 1,
            Some(false) => report.b_wins += 1,
            None => report.draws += 1,
        }
    }
    Ok(report)
}
