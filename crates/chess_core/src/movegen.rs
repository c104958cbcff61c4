use tracing::trace;

use crate::{board::Board, types::*, validate::try_move};

/// Every legal move for `color`, freshly computed.
///
/// Each of the side's pieces is tried against all 64 destinations through
/// the validator with a queen as the promotion choice. Promotions come back
/// with `promotion: Some(Queen)`, everything else with `None`.
pub fn enumerate_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(board, color, &mut out);
    out
}

/// Same as `enumerate_legal_moves`, reusing the caller's buffer.
pub fn legal_moves_into(board: &Board, color: Color, out: &mut Vec<Move>) {
    out.clear();
    for (from, _) in board.pieces(color) {
        for to in Square::all() {
            let mv = Move::new(from, to);
            if let Ok((_, promoted_to)) = try_move(board, color, mv) {
                out.push(Move {
                    promotion: promoted_to,
                    ..mv
                });
            }
        }
    }
    trace!(%color, count = out.len(), "enumerated legal moves");
}

pub fn is_in_check(board: &Board, color: Color) -> bool {
    board.is_in_check(color)
}

/// Status of the game with `color` to move.
pub fn game_outcome(board: &Board, color: Color) -> Outcome {
    if has_legal_move(board, color) {
        Outcome::Ongoing
    } else if board.is_in_check(color) {
        Outcome::Checkmate(color.other())
    } else {
        Outcome::Stalemate
    }
}

fn has_legal_move(board: &Board, color: Color) -> bool {
    board.pieces(color).any(|(from, _)| {
        Square::all().any(|to| try_move(board, color, Move::new(from, to)).is_ok())
    })
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
