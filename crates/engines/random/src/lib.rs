//! Random Move Chess Engine
//!
//! Picks uniformly at random from all legal moves. Used as the computer
//! opponent in the text front end, and as a baseline for anything smarter.

use chess_core::{Board, Color, Move, MoveSource, enumerate_legal_moves};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

#[cfg(test)]
mod lib_tests;

/// A move source that plays random legal moves.
///
/// Promotions always become queens, since the enumerated moves carry the
/// default choice.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    moves_played: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            moves_played: 0,
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            moves_played: 0,
        }
    }

    pub fn moves_played(&self) -> u64 {
        self.moves_played
    }
}

impl MoveSource for RandomEngine {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let moves = enumerate_legal_moves(board, color);
        let choice = moves.choose(&mut self.rng).copied();
        if let Some(mv) = choice {
            self.moves_played += 1;
            debug!(%mv, candidates = moves.len(), "random engine picked a move");
        }
        choice
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
