//! Single-move validation and application.
//!
//! A move is checked in a fixed order: ownership, occupancy, shape, then
//! either the castling rules or path clearance, and finally own-king safety.
//! All changes happen on a clone; the caller's board is never touched.

use tracing::{debug, warn};

use crate::{board::Board, error::MoveError, types::*};

/// An accepted move: the board after it, and what the opponent now faces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: Board,
    /// The opponent's king is attacked on `board`.
    pub opponent_in_check: bool,
    /// Kind placed on the last rank when the move was a promotion.
    pub promoted_to: Option<PieceKind>,
}

/// Validate `mv` for `mover` and return the resulting board.
///
/// A missing promotion choice becomes a queen, and so does an unusable one
/// (pawn or king), with a warning logged.
pub fn apply_move(board: &Board, mover: Color, mv: Move) -> Result<AppliedMove, MoveError> {
    match try_move(board, mover, mv) {
        Ok((next, promoted_to)) => {
            if promoted_to.is_some()
                && let Err(e) = resolve_promotion(mv.promotion)
            {
                warn!(%mv, error = %e, "promotion choice replaced with queen");
            }
            let opponent_in_check = next.is_in_check(mover.other());
            debug!(%mv, %mover, opponent_in_check, "move accepted");
            Ok(AppliedMove {
                board: next,
                opponent_in_check,
                promoted_to,
            })
        }
        Err(e) => {
            debug!(%mv, %mover, reason = %e, "move rejected");
            Err(e)
        }
    }
}

/// The piece a pawn becomes: queen when nothing was chosen, an error for
/// kinds a pawn cannot promote to.
pub fn resolve_promotion(choice: Option<PieceKind>) -> Result<PieceKind, MoveError> {
    match choice {
        None => Ok(PieceKind::Queen),
        Some(kind) if kind.is_promotion_target() => Ok(kind),
        Some(kind) => Err(MoveError::InvalidPromotionChoice(format!(
            "cannot promote to a {kind}"
        ))),
    }
}

/// Silent validation used by both `apply_move` and move enumeration.
pub(crate) fn try_move(
    board: &Board,
    mover: Color,
    mv: Move,
) -> Result<(Board, Option<PieceKind>), MoveError> {
    let (from, to) = (mv.from, mv.to);

    let piece = match board.piece_at(from) {
        Some(pc) if pc.color == mover => pc,
        _ => return Err(MoveError::NoPieceOrWrongTurn),
    };
    let target = board.piece_at(to);

    check_occupancy(piece, from, to, target)?;

    if !piece.can_move(from, to) {
        // A two-square king step is only refused here once the king has moved
        if piece.is_castle_step(from, to) {
            return Err(MoveError::CastlingUnavailable);
        }
        return Err(MoveError::IllegalShape);
    }

    let mut trial = board.clone();
    let mut promoted_to = None;

    if piece.is_castle_step(from, to) {
        castle(&mut trial, piece, from, to)?;
    } else {
        if piece.kind != PieceKind::Knight && !trial.path_is_clear(from, to) {
            return Err(MoveError::BlockedPath);
        }
        let mut moved = piece;
        moved.has_moved = true;
        if piece.kind == PieceKind::Pawn && to.row() == mover.last_row() {
            let kind = resolve_promotion(mv.promotion).unwrap_or(PieceKind::Queen);
            moved = Piece {
                color: mover,
                kind,
                has_moved: true,
            };
            promoted_to = Some(kind);
        }
        trial.set_piece(from, None);
        trial.set_piece(to, Some(moved));
    }

    if trial.is_in_check(mover) {
        return Err(MoveError::SelfCheck);
    }
    Ok((trial, promoted_to))
}

fn check_occupancy(
    piece: Piece,
    from: Square,
    to: Square,
    target: Option<Piece>,
) -> Result<(), MoveError> {
    let enemy = target.is_some_and(|t| t.color != piece.color);
    let friendly = target.is_some_and(|t| t.color == piece.color);

    if piece.kind == PieceKind::Pawn {
        let dr = to.row() as i8 - from.row() as i8;
        let dc = to.col() as i8 - from.col() as i8;
        if dc == 0 && target.is_some() {
            return Err(MoveError::IllegalCapture);
        }
        if dc.abs() == 1 && dr == piece.color.forward() && !enemy {
            return Err(MoveError::IllegalCapture);
        }
        return Ok(());
    }
    if friendly {
        return Err(MoveError::IllegalCapture);
    }
    Ok(())
}

/// Move king and rook together on `trial`, or say why castling is refused.
///
/// Only the square the king crosses is tested for attack; the landing square
/// is covered by the self-check test that follows.
fn castle(trial: &mut Board, king: Piece, from: Square, to: Square) -> Result<(), MoveError> {
    let step: i8 = if to.col() > from.col() { 1 } else { -1 };
    let corner_col = if step > 0 { 7 } else { 0 };
    let rook_sq = Square::new(from.row(), corner_col)?;

    let mut rook = match trial.piece_at(rook_sq) {
        Some(pc) if pc.kind == PieceKind::Rook && pc.color == king.color && !pc.has_moved => pc,
        _ => return Err(MoveError::CastlingUnavailable),
    };
    if !trial.path_is_clear(from, rook_sq) {
        return Err(MoveError::CastlingBlocked);
    }
    let enemy = king.color.other();
    if trial.is_in_check(king.color) {
        return Err(MoveError::CastlingBlocked);
    }
    let transit = from
        .offset(0, step)
        .ok_or_else(|| MoveError::MalformedInput(format!("no square beside {from}")))?;
    if trial.is_square_attacked(transit, enemy) {
        return Err(MoveError::CastlingBlocked);
    }

    let mut king = king;
    king.has_moved = true;
    rook.has_moved = true;
    trial.set_piece(from, None);
    trial.set_piece(rook_sq, None);
    trial.set_piece(to, Some(king));
    trial.set_piece(transit, Some(rook));
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod validate_tests;
