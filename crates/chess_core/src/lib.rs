pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod piece;
pub mod types;
pub mod validate;

// Re-export core game logic (not player-specific)
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use types::*;
pub use validate::{AppliedMove, apply_move, resolve_promotion};

// =============================================================================
// MoveSource trait: implemented by anything that picks moves (people, engines)
// =============================================================================

/// Supplies moves for one side of a game.
///
/// The rules engine never calls this itself; a game session asks the side
/// to move for a proposal and runs it through [`apply_move`].
pub trait MoveSource {
    /// Propose a move for `color` on `board`.
    ///
    /// # Returns
    /// `None` when the source has nothing to offer (no legal moves, end of
    /// input, resignation).
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move>;

    /// Returns the source's display name
    fn name(&self) -> &str;

    /// Automated sources get no second chance after an illegal proposal and
    /// never answer promotion prompts.
    fn is_automated(&self) -> bool {
        true
    }
}
