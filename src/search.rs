//! A depth-limited minimax agent with alpha-beta pruning

use anyhow::{anyhow, Result};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    board::{Board, Piece},
    config::EngineConfig,
    evaluation::Evaluator,
    win::has_won,
};

/// The score of a position the AI has won
pub const WIN_SCORE: i32 = 1_000_000;
/// The score of a position the opponent has won
pub const LOSS_SCORE: i32 = -WIN_SCORE;
/// The score of a drawn position
pub const DRAW_SCORE: i32 = 0;

/// Bound wider than any reachable score, used for the initial search window
pub const INFINITY: i32 = i32::MAX;

/// The outcome of searching a position
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The best column found, `None` when the searched node was a leaf
    pub column: Option<usize>,
    /// The minimax value of the position for the AI piece
    pub score: i32,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            column: None,
            score,
        }
    }
}

/// An agent that picks moves by fixed-depth minimax search
///
/// # Notes
/// The search mutates a single board in place and undoes every move before
/// returning from that level, including when a branch is pruned.
///
/// # Position Scoring
/// Scores are always from the point of view of the AI piece. A won position
/// is worth [`WIN_SCORE`], a lost one [`LOSS_SCORE`] and a draw [`DRAW_SCORE`].
/// Positions at the depth limit are scored by the [`Evaluator`], whose
/// values stay far below the win score in magnitude.
///
/// # Tie-breaks
/// Each node starts with a best column drawn uniformly from the playable
/// columns, then replaces it with the first column that strictly improves on
/// the running best score. The random source can be seeded for repeatable play.
pub struct SearchEngine<R = StdRng> {
    ai_piece: Piece,
    depth: usize,
    evaluator: Evaluator,
    rng: R,

    /// The number of nodes searched by this `SearchEngine` so far (for diagnostics only)
    pub node_count: usize,
}

impl SearchEngine<StdRng> {
    /// Creates a new `SearchEngine`, seeding the tie-break random source from
    /// the config or from entropy if it has no seed
    pub fn from_config(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> SearchEngine<R> {
    /// Creates a new `SearchEngine` with a given random source
    pub fn with_rng(config: &EngineConfig, rng: R) -> Self {
        Self {
            ai_piece: config.ai_piece,
            depth: config.depth,
            evaluator: Evaluator::new(config.weights),
            rng,
            node_count: 0,
        }
    }

    pub fn ai_piece(&self) -> Piece {
        self.ai_piece
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// The fixed value of a finished game, or `None` if play can continue
    fn terminal_score(&self, board: &Board) -> Option<i32> {
        if has_won(board, self.ai_piece) {
            Some(WIN_SCORE)
        } else if has_won(board, self.ai_piece.opponent()) {
            Some(LOSS_SCORE)
        } else if board.is_full() {
            Some(DRAW_SCORE)
        } else {
            None
        }
    }

    /// Performs game tree search on `board`, restoring it before returning
    ///
    /// `maximizing` is true when the AI piece is to move. Columns are tried
    /// in ascending order and the remaining columns of a node are skipped
    /// once `alpha >= beta`.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        if let Some(score) = self.terminal_score(board) {
            return SearchResult::leaf(score);
        }
        if depth == 0 {
            return SearchResult::leaf(self.evaluator.score_position(board, self.ai_piece));
        }

        // never empty here, a full board is terminal
        let valid_columns = board.valid_columns();
        let piece = if maximizing {
            self.ai_piece
        } else {
            self.ai_piece.opponent()
        };

        let mut best_column = valid_columns.choose(&mut self.rng).copied();
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };

        for &column in valid_columns.iter() {
            let row = match board.play(column, piece) {
                Some(row) => row,
                None => continue,
            };
            let score = self.minimax(board, depth - 1, alpha, beta, !maximizing).score;
            let cleared = board.remove_piece(column);
            debug_assert_eq!(cleared, Some(row));

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_column = Some(column);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_column = Some(column);
                }
                beta = beta.min(best_score);
            }

            // the other side will never allow this node, skip the remaining columns
            if alpha >= beta {
                break;
            }
        }

        SearchResult {
            column: best_column,
            score: best_score,
        }
    }

    /// Searches `board` to `depth` plies with a full window
    ///
    /// The board is copied, the caller's board is never touched. A depth of 0
    /// or a finished game yields a result without a column.
    pub fn find_best_move(&mut self, board: &Board, depth: usize, maximizing: bool) -> SearchResult {
        let mut board = *board;
        self.minimax(&mut board, depth, -INFINITY, INFINITY, maximizing)
    }

    /// Chooses the column the AI piece should play next, searching to the
    /// configured depth
    ///
    /// Falls back to a random playable column when the search returns no
    /// column, which only happens at depth 0.
    pub fn choose_column(&mut self, board: &Board) -> Result<usize> {
        let result = self.find_best_move(board, self.depth, true);
        match result.column {
            Some(column) => Ok(column),
            None => board
                .valid_columns()
                .choose(&mut self.rng)
                .copied()
                .ok_or_else(|| anyhow!("no valid moves, the board is full")),
        }
    }
}
