use crate::error::FenError;
use crate::types::*;

/// 8x8 grid of optional occupants, indexed `[row][col]`.
///
/// The board carries no turn. It is a plain value: trial moves work on a
/// clone and the authoritative board is only ever replaced wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        // Pawns
        for col in 0..8 {
            b.grid[1][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            b.grid[6][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            b.grid[0][col] = Some(Piece::new(kind, Color::White));
            b.grid[7][col] = Some(Piece::new(kind, Color::Black));
        }
        b
    }

    /// Build a board from Forsyth-Edwards Notation.
    ///
    /// Only the placement and castling fields carry information for the
    /// board; side to move is checked for shape and otherwise ignored.
    /// `has_moved` is inferred: pawns on their starting rank, and kings and
    /// rooks backed by a castling right, count as unmoved.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        let board_part = *parts.first().ok_or(FenError::Empty)?;
        let castle_part = parts.get(2).copied().unwrap_or("-");

        if let Some(&stm) = parts.get(1)
            && stm != "w"
            && stm != "b"
        {
            return Err(FenError::InvalidSideToMove(stm.to_string()));
        }

        let mut rights = [[false; 2]; 2]; // [color][queenside, kingside]
        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => rights[0][1] = true,
                    'Q' => rights[0][0] = true,
                    'k' => rights[1][1] = true,
                    'q' => rights[1][0] = true,
                    _ => return Err(FenError::InvalidCastling(c)),
                }
            }
        }

        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let row = 7 - rank_idx; // FEN lists rank 8 .. 1
            let mut col: usize = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                } else {
                    let kind = PieceKind::from_symbol(ch).ok_or(FenError::InvalidPiece(ch))?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if col >= 8 {
                        return Err(FenError::BadRankLength {
                            rank: row + 1,
                            files: col + 1,
                        });
                    }
                    let mut piece = Piece::new(kind, color);
                    piece.has_moved = !starts_unmoved(kind, color, row, col, &rights);
                    board.grid[row][col] = Some(piece);
                    col += 1;
                }
            }
            if col != 8 {
                return Err(FenError::BadRankLength {
                    rank: row + 1,
                    files: col,
                });
            }
        }
        Ok(board)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row() as usize][sq.col() as usize]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.grid[sq.row() as usize][sq.col() as usize] = pc;
    }

    /// Every piece of `color` with its square.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(pc) if pc.color == color => Some((sq, pc)),
            _ => None,
        })
    }

    pub fn find_king(&self, c: Color) -> Option<Square> {
        self.pieces(c)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Whether every square strictly between `from` and `to` is empty.
    ///
    /// Only meaningful for straight or diagonal lines; knight jumps must
    /// skip this check.
    pub fn path_is_clear(&self, from: Square, to: Square) -> bool {
        let dr = (to.row() as i8 - from.row() as i8).signum();
        let dc = (to.col() as i8 - from.col() as i8).signum();
        let mut cur = from;
        loop {
            cur = match cur.offset(dr, dc) {
                Some(next) => next,
                None => return true,
            };
            if cur == to {
                return true;
            }
            if self.piece_at(cur).is_some() {
                return false;
            }
        }
    }

    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        self.pieces(by).any(|(from, pc)| match pc.kind {
            PieceKind::Pawn => pc.attacks(from, target),
            PieceKind::Knight => pc.can_move(from, target),
            _ => pc.attacks(from, target) && self.path_is_clear(from, target),
        })
    }

    /// False when `c` has no king on the board.
    pub fn is_in_check(&self, c: Color) -> bool {
        let ksq = match self.find_king(c) {
            Some(s) => s,
            None => return false,
        };
        self.is_square_attacked(ksq, c.other())
    }

    /// Neither side can ever deliver mate: K v K, K+minor v K, or bishops
    /// on the same square color only.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = Vec::new();
        for sq in Square::all() {
            let Some(pc) = self.piece_at(sq) else {
                continue;
            };
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Knight | PieceKind::Bishop => minors.push((sq, pc)),
                _ => return false,
            }
        }
        match minors.as_slice() {
            [] | [_] => true,
            [(s1, p1), (s2, p2)] => {
                p1.kind == PieceKind::Bishop
                    && p2.kind == PieceKind::Bishop
                    && p1.color != p2.color
                    && (s1.row() + s1.col()) % 2 == (s2.row() + s2.col()) % 2
            }
            _ => false,
        }
    }
}

fn starts_unmoved(
    kind: PieceKind,
    color: Color,
    row: usize,
    col: usize,
    rights: &[[bool; 2]; 2],
) -> bool {
    let home = color.home_row() as usize;
    let side = rights[color.idx()];
    match kind {
        PieceKind::Pawn => row == color.pawn_row() as usize,
        PieceKind::King => row == home && col == 4 && (side[0] || side[1]),
        PieceKind::Rook => row == home && ((col == 0 && side[0]) || (col == 7 && side[1])),
        _ => true,
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
