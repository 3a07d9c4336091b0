//! Settings for a search engine

use crate::{board::Piece, evaluation::Weights};

/// The search depth used when none is given
pub const DEFAULT_DEPTH: usize = 6;

/// Settings for one AI player, fixed for the lifetime of its engine
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// The piece the engine plays and maximizes for
    pub ai_piece: Piece,
    /// Plies searched per move
    pub depth: usize,
    pub weights: Weights,
    /// Seed for the tie-break random source, `None` seeds from entropy
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn new(ai_piece: Piece, depth: usize) -> Self {
        Self {
            ai_piece,
            depth,
            weights: Weights::default(),
            seed: None,
        }
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(Piece::PlayerTwo, DEFAULT_DEPTH)
    }
}
