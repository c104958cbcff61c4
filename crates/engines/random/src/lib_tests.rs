use super::*;
use chess_core::apply_move;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let board = Board::startpos();

    let mv = engine.choose_move(&board, Color::White);

    assert!(mv.is_some());
    let legal_moves = enumerate_legal_moves(&board, Color::White);
    assert!(legal_moves.contains(&mv.unwrap()));
    assert!(apply_move(&board, Color::White, mv.unwrap()).is_ok());
    assert_eq!(engine.moves_played(), 1);
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    let board = Board::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
        .unwrap();

    assert!(engine.choose_move(&board, Color::Black).is_none());
    assert_eq!(engine.moves_played(), 0);
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    let board = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();

    assert!(engine.choose_move(&board, Color::Black).is_none());
}

#[test]
fn seeded_engines_agree() {
    let mut a = RandomEngine::with_seed(7);
    let mut b = RandomEngine::with_seed(7);
    let mut board = Board::startpos();
    let mut color = Color::White;

    for _ in 0..10 {
        let ma = a.choose_move(&board, color);
        let mb = b.choose_move(&board, color);
        assert_eq!(ma, mb);
        let Some(mv) = ma else { break };
        board = apply_move(&board, color, mv).unwrap().board;
        color = color.other();
    }
}

#[test]
fn random_engine_is_automated() {
    let engine = RandomEngine::with_seed(1);
    assert!(engine.is_automated());
    assert_eq!(engine.name(), "Random v1.0");
}
