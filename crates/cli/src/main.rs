//! Play chess in the terminal
//!
//! Each side is either a person typing coordinate moves or the random engine.

use anyhow::Context;
use chess_cli::{CliOptions, GameConfig, GameSession, HumanPlayer, PlayerKind, SharedInput};
use chess_core::{Color, MoveSource};
use random_engine::RandomEngine;
use std::cell::RefCell;
use std::env;
use std::io;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Terminal chess");
    println!();
    println!("Usage:");
    println!("  chess [--config FILE] [--white KIND] [--black KIND] [--seed N] [--max-plies N] [--quiet]");
    println!();
    println!("Players (KIND):");
    println!("  human   - type moves such as 'e2 e4' or 'e7e8q'; 'quit' resigns");
    println!("  random  - plays a random legal move");
    println!();
    println!("Examples:");
    println!("  chess                          # you (white) against the random engine");
    println!("  chess --white random --black random --seed 3 --max-plies 100");
    println!();
    println!("Set RUST_LOG=debug to see move-by-move logging.");
}

fn create_player(
    kind: PlayerKind,
    color: Color,
    seed: Option<u64>,
    input: &SharedInput,
) -> Box<dyn MoveSource> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(
            &color.to_string(),
            input.clone(),
            io::stdout(),
        )),
        PlayerKind::Random => match seed {
            // Different streams for the two sides when both are random
            Some(seed) => Box::new(RandomEngine::with_seed(seed.wrapping_add(color.idx() as u64))),
            None => Box::new(RandomEngine::new()),
        },
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let opts = CliOptions::parse(&args).context("invalid command line")?;
    if opts.help {
        print_usage();
        return Ok(());
    }
    let config = GameConfig::resolve(&opts)?;

    let input: SharedInput = Rc::new(RefCell::new(io::stdin().lock()));
    let mut white = create_player(config.white, Color::White, config.seed, &input);
    let mut black = create_player(config.black, Color::Black, config.seed, &input);

    println!("{} (white) vs {} (black)", white.name(), black.name());
    println!();

    let mut session = GameSession::new();
    let mut stdout = io::stdout();
    let end = session.run(white.as_mut(), black.as_mut(), &config, &mut stdout)?;

    println!("=== {end} ===");
    println!("Moves: {}", session.history().join(" "));
    Ok(())
}
