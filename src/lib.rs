//! A depth-limited minimax agent for playing the board game 'Connect 4'
//!
//! This agent searches a fixed number of plies ahead with alpha-beta pruning
//! and scores the positions it cannot see past with a window-counting heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::{Board, Piece}, config::EngineConfig, search::SearchEngine};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player two has three in a row along the bottom and is to move
//! let board = Board::from_moves("1516271")?;
//! let config = EngineConfig::new(Piece::PlayerTwo, 2).with_seed(7);
//! let mut engine = SearchEngine::from_config(&config);
//!
//! let result = engine.find_best_move(&board, config.depth, true);
//! assert_eq!(result.column, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod win;

pub mod evaluation;

pub mod config;

pub mod search;

pub mod self_play;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const WINDOW_LENGTH: usize = 4;

// a window must fit along every direction it is scanned in
const_assert!(WINDOW_LENGTH <= WIDTH && WINDOW_LENGTH <= HEIGHT);
