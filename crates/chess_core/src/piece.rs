//! Movement geometry per piece kind.
//!
//! These answer "is this displacement a legal shape for the piece", nothing
//! more. Occupancy and obstruction are decided by the board and validator.

use crate::types::*;

fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

fn rook_shape(dr: i8, dc: i8) -> bool {
    (dr == 0) != (dc == 0)
}

fn bishop_shape(dr: i8, dc: i8) -> bool {
    dr != 0 && dr.abs() == dc.abs()
}

impl Piece {
    /// Shape legality of `from -> to`, ignoring the board.
    ///
    /// Pawn diagonals are accepted whether or not something can be captured,
    /// and the king's two-square castling step is accepted while the king is
    /// unmoved; both are narrowed down by the validator.
    pub fn can_move(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = deltas(from, to);
        match self.kind {
            PieceKind::Pawn => {
                let dir = self.color.forward();
                let single = dr == dir && dc == 0;
                let double = dr == 2 * dir
                    && dc == 0
                    && !self.has_moved
                    && from.row() == self.color.pawn_row();
                let diagonal = dr == dir && dc.abs() == 1;
                single || double || diagonal
            }
            PieceKind::Rook => rook_shape(dr, dc),
            PieceKind::Knight => matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2)),
            PieceKind::Bishop => bishop_shape(dr, dc),
            PieceKind::Queen => rook_shape(dr, dc) || bishop_shape(dr, dc),
            PieceKind::King => {
                let step = dr.abs().max(dc.abs()) == 1;
                let castle = dr == 0 && dc.abs() == 2 && !self.has_moved;
                step || castle
            }
        }
    }

    /// Squares a pawn threatens: the forward diagonals, occupied or not.
    /// For every other kind this is the same as `can_move` minus castling.
    pub fn attacks(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = deltas(from, to);
        match self.kind {
            PieceKind::Pawn => dr == self.color.forward() && dc.abs() == 1,
            PieceKind::King => dr.abs().max(dc.abs()) == 1,
            _ => self.can_move(from, to),
        }
    }

    /// True when this move is the king's two-square castling step.
    pub fn is_castle_step(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = deltas(from, to);
        self.kind == PieceKind::King && dr == 0 && dc.abs() == 2
    }
}

#[cfg(test)]
#[path = "piece_tests.rs"]
mod piece_tests;
