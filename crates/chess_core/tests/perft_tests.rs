use std::time::Instant;

use rayon::prelude::*;

use chess_core::{Board, Color, perft};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 100_000;

/// (name, FEN, side to move, [(depth, nodes)]).
///
/// Depths are limited to those whose reference counts contain no en passant
/// captures or under-promotions, since neither exists in these rules.
const CASES: &[(&str, &str, Color, &[(u8, u64)])] = &[
    (
        "startpos",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        Color::White,
        &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        Color::White,
        &[(1, 48)],
    ),
    (
        "position 3",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        Color::White,
        &[(1, 14), (2, 191)],
    ),
    (
        "position 4",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -",
        Color::White,
        &[(1, 6)],
    ),
    (
        "position 6",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - -",
        Color::White,
        &[(1, 46), (2, 2_079)],
    ),
];

#[test]
fn perft_reference_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    CASES.par_iter().for_each(|(name, fen, color, depths)| {
        let board = Board::from_fen(fen).expect("reference FEN parses");
        let case_start = Instant::now();
        let mut ran_depths = Vec::new();

        for &(depth, expected) in depths.iter() {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {} for {} (expected {} nodes) - set {}=1 to run all.",
                    depth, name, expected, FULL_PERFT_ENV
                );
                continue;
            }
            let got = perft(&board, *color, depth);
            assert!(
                got == expected,
                "Perft mismatch for '{}' at depth {}: expected {}, got {}",
                name,
                depth,
                expected,
                got
            );
            ran_depths.push(depth);
        }

        println!(
            "{} done: depths {:?}, elapsed {:.3?}",
            name,
            ran_depths,
            case_start.elapsed()
        );
    });
}

#[test]
fn perft_depth_zero_is_one() {
    assert_eq!(perft(&Board::startpos(), Color::White, 0), 1);
}
