use super::*;

fn s(name: &str) -> Square {
    Square::parse(name).unwrap()
}

fn mv(from: &str, to: &str) -> Move {
    Move::new(s(from), s(to))
}

fn fen(f: &str) -> Board {
    Board::from_fen(f).unwrap()
}

#[test]
fn test_opening_pawn_push() {
    let board = Board::startpos();
    let applied = apply_move(&board, Color::White, mv("e2", "e4")).unwrap();
    assert_eq!(applied.board.piece_at(s("e2")), None);
    let pawn = applied.board.piece_at(s("e4")).unwrap();
    assert_eq!(pawn.kind, PieceKind::Pawn);
    assert!(pawn.has_moved);
    assert!(!applied.opponent_in_check);
    assert_eq!(applied.promoted_to, None);
    // Source board untouched
    assert_eq!(board, Board::startpos());
}

#[test]
fn test_wrong_turn_and_empty_origin() {
    let board = Board::startpos();
    assert_eq!(
        apply_move(&board, Color::White, mv("e7", "e5")),
        Err(MoveError::NoPieceOrWrongTurn)
    );
    assert_eq!(
        apply_move(&board, Color::White, mv("e4", "e5")),
        Err(MoveError::NoPieceOrWrongTurn)
    );
}

#[test]
fn test_illegal_shapes() {
    let board = Board::startpos();
    assert_eq!(
        apply_move(&board, Color::White, mv("e2", "e5")),
        Err(MoveError::IllegalShape)
    );
    assert_eq!(
        apply_move(&board, Color::White, mv("g1", "g3")),
        Err(MoveError::IllegalShape)
    );
    let moved = apply_move(&board, Color::White, mv("e2", "e3")).unwrap().board;
    assert_eq!(
        apply_move(&moved, Color::White, mv("e3", "e5")),
        Err(MoveError::IllegalShape)
    );
}

#[test]
fn test_blocked_paths() {
    let board = Board::startpos();
    assert_eq!(
        apply_move(&board, Color::White, mv("a1", "a3")),
        Err(MoveError::BlockedPath)
    );
    assert_eq!(
        apply_move(&board, Color::White, mv("f1", "c4")),
        Err(MoveError::BlockedPath)
    );
    // Double step through an occupied square
    let board = fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    assert_eq!(
        apply_move(&board, Color::White, mv("e2", "e4")),
        Err(MoveError::BlockedPath)
    );
}

#[test]
fn test_knights_jump() {
    let board = Board::startpos();
    assert!(apply_move(&board, Color::White, mv("g1", "f3")).is_ok());
    assert!(apply_move(&board, Color::Black, mv("b8", "c6")).is_ok());
}

#[test]
fn test_illegal_captures() {
    let board = Board::startpos();
    // Own piece
    assert_eq!(
        apply_move(&board, Color::White, mv("a1", "a2")),
        Err(MoveError::IllegalCapture)
    );
    // Pawn diagonal onto an empty square
    assert_eq!(
        apply_move(&board, Color::White, mv("e2", "d3")),
        Err(MoveError::IllegalCapture)
    );
    // Pawn push into a piece
    let board = fen("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1");
    assert_eq!(
        apply_move(&board, Color::White, mv("e3", "e4")),
        Err(MoveError::IllegalCapture)
    );
}

#[test]
fn test_pawn_captures_diagonally() {
    let board = fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
    let applied = apply_move(&board, Color::White, mv("e4", "d5")).unwrap();
    let pc = applied.board.piece_at(s("d5")).unwrap();
    assert_eq!((pc.kind, pc.color), (PieceKind::Pawn, Color::White));
    assert_eq!(applied.board.pieces(Color::Black).count(), 1);
}

#[test]
fn test_opponent_in_check_reported() {
    let board = fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    let applied = apply_move(&board, Color::White, mv("a1", "a8")).unwrap();
    assert!(applied.opponent_in_check);
}

#[test]
fn test_pinned_piece_cannot_move() {
    // Bishop on e2 is pinned to the king by the rook on e8
    let board = fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1");
    let before = board.clone();
    assert_eq!(
        apply_move(&board, Color::White, mv("e2", "d3")),
        Err(MoveError::SelfCheck)
    );
    assert_eq!(board, before);
}

#[test]
fn test_king_cannot_step_into_attack() {
    let board = fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1");
    // d1 is covered by the rook, d2 capture is fine
    assert_eq!(
        apply_move(&board, Color::White, mv("e1", "d1")),
        Err(MoveError::SelfCheck)
    );
    assert!(apply_move(&board, Color::White, mv("e1", "d2")).is_ok());
}

#[test]
fn test_castle_kingside_moves_both_pieces() {
    let board = fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    let applied = apply_move(&board, Color::White, mv("e1", "g1")).unwrap();
    let king = applied.board.piece_at(s("g1")).unwrap();
    let rook = applied.board.piece_at(s("f1")).unwrap();
    assert_eq!(king.kind, PieceKind::King);
    assert_eq!(rook.kind, PieceKind::Rook);
    assert!(king.has_moved && rook.has_moved);
    assert_eq!(applied.board.piece_at(s("e1")), None);
    assert_eq!(applied.board.piece_at(s("h1")), None);
}

#[test]
fn test_castle_queenside() {
    let board = fen("r3k3/8/8/8/8/8/8/4K3 b q - 0 1");
    let applied = apply_move(&board, Color::Black, mv("e8", "c8")).unwrap();
    assert_eq!(
        applied.board.piece_at(s("c8")).map(|p| p.kind),
        Some(PieceKind::King)
    );
    assert_eq!(
        applied.board.piece_at(s("d8")).map(|p| p.kind),
        Some(PieceKind::Rook)
    );
}

#[test]
fn test_castle_unavailable() {
    // No rook on h1
    let mut board = fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    board.set_piece(s("e1"), Some(Piece::new(PieceKind::King, Color::White)));
    assert_eq!(
        apply_move(&board, Color::White, mv("e1", "g1")),
        Err(MoveError::CastlingUnavailable)
    );
    // Rook present but has moved
    let board = fen("4k3/8/8/8/8/8/8/4K2R w Q - 0 1");
    assert_eq!(
        apply_move(&board, Color::White, mv("e1", "g1")),
        Err(MoveError::CastlingUnavailable)
    );
    // Enemy rook in the corner
    let mut board = board;
    board.set_piece(s("h1"), Some(Piece::new(PieceKind::Rook, Color::Black)));
    assert_eq!(
        apply_move(&board, Color::White, mv("e1", "g1")),
        Err(MoveError::CastlingUnavailable)
    );
}

#[test]
fn test_moved_king_cannot_castle() {
    let board = fen("4k3/8/8/8/8/8/8/4K2R w - - 0 1");
    assert_eq!(
        apply_move(&board, Color::White, mv("e1", "g1")),
        Err(MoveError::CastlingUnavailable)
    );
}

#[test]
fn test_castle_blocked() {
    // Knight on b1 sits between king and rook
    let board = fen("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
    assert_eq!(
        apply_move(&board, Color::White, mv("e1", "c1")),
        Err(MoveError::CastlingBlocked)
    );
    // King in check
    let board = fen("4k3/8/8/8/8/8/4r3/4K2R w K - 0 1");
    assert_eq!(
        apply_move(&board, Color::White, mv("e1", "g1")),
        Err(MoveError::CastlingBlocked)
    );
    // Transit square f1 attacked
    let board = fen("4k3/8/8/8/8/8/5r2/4K2R w K - 0 1");
    assert_eq!(
        apply_move(&board, Color::White, mv("e1", "g1")),
        Err(MoveError::CastlingBlocked)
    );
}

#[test]
fn test_castle_into_check_is_self_check() {
    // g1 covered by the rook on g8, f1 is safe
    let board = fen("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1");
    assert_eq!(
        apply_move(&board, Color::White, mv("e1", "g1")),
        Err(MoveError::SelfCheck)
    );
}

#[test]
fn test_promotion_choices() {
    let board = fen("7k/P7/8/8/8/8/8/K7 w - - 0 1");
    let to_knight = Move::with_promotion(s("a7"), s("a8"), PieceKind::Knight);
    let applied = apply_move(&board, Color::White, to_knight).unwrap();
    assert_eq!(applied.promoted_to, Some(PieceKind::Knight));
    assert_eq!(
        applied.board.piece_at(s("a8")).map(|p| p.kind),
        Some(PieceKind::Knight)
    );

    // A king is not an option; the queen is used instead
    let to_king = Move::with_promotion(s("a7"), s("a8"), PieceKind::King);
    let applied = apply_move(&board, Color::White, to_king).unwrap();
    assert_eq!(applied.promoted_to, Some(PieceKind::Queen));
    assert!(applied.opponent_in_check);
}

#[test]
fn test_resolve_promotion() {
    assert_eq!(resolve_promotion(None), Ok(PieceKind::Queen));
    assert_eq!(
        resolve_promotion(Some(PieceKind::Rook)),
        Ok(PieceKind::Rook)
    );
    assert!(matches!(
        resolve_promotion(Some(PieceKind::Pawn)),
        Err(MoveError::InvalidPromotionChoice(_))
    ));
}
