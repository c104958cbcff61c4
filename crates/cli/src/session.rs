//! Game loop: alternate between two move sources until the game ends

use anyhow::bail;
use chess_core::{apply_move, game_outcome, Board, Color, Move, MoveError, MoveSource, Outcome};
use std::fmt;
use std::io::Write;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::render::render_board;

/// Where the position stands after the last move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Ongoing,
    Checkmate(Color),
    Stalemate,
    InsufficientMaterial,
}

/// How a played-out game finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    /// The side that gave up (or ran out of input)
    Resigned(Color),
    PlyLimit,
}

impl fmt::Display for GameEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEnd::Checkmate { winner } => write!(f, "Checkmate! {winner} wins"),
            GameEnd::Stalemate => write!(f, "Stalemate, the game is drawn"),
            GameEnd::InsufficientMaterial => write!(f, "Draw by insufficient material"),
            GameEnd::Resigned(color) => write!(f, "{color} resigns, {} wins", color.other()),
            GameEnd::PlyLimit => write!(f, "Ply limit reached"),
        }
    }
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Color,
    history: Vec<String>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Color::White)
    }

    /// Start from an arbitrary position
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Moves played so far in coordinate notation
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Play a move for the side to move.
    ///
    /// Returns whether the opponent is now in check. A rejected move leaves
    /// the session unchanged.
    pub fn play(&mut self, mv: Move) -> Result<bool, MoveError> {
        let applied = apply_move(&self.board, self.turn, mv)?;
        let played = match applied.promoted_to {
            Some(kind) => Move::with_promotion(mv.from, mv.to, kind),
            None => Move::new(mv.from, mv.to),
        };
        self.board = applied.board;
        self.history.push(played.to_string());
        self.turn = self.turn.other();
        Ok(applied.opponent_in_check)
    }

    pub fn status(&self) -> SessionStatus {
        match game_outcome(&self.board, self.turn) {
            Outcome::Checkmate(winner) => SessionStatus::Checkmate(winner),
            Outcome::Stalemate => SessionStatus::Stalemate,
            Outcome::Ongoing if self.board.is_insufficient_material() => {
                SessionStatus::InsufficientMaterial
            }
            Outcome::Ongoing => SessionStatus::Ongoing,
        }
    }

    /// Play until the game ends.
    ///
    /// Interactive sources are told why a move was rejected and asked again.
    /// An automated source proposing an illegal move is a bug and aborts
    /// the game.
    pub fn run<W: Write>(
        &mut self,
        white: &mut dyn MoveSource,
        black: &mut dyn MoveSource,
        config: &GameConfig,
        out: &mut W,
    ) -> anyhow::Result<GameEnd> {
        let mut plies = 0u32;
        let end = loop {
            match self.status() {
                SessionStatus::Checkmate(winner) => break GameEnd::Checkmate { winner },
                SessionStatus::Stalemate => break GameEnd::Stalemate,
                SessionStatus::InsufficientMaterial => break GameEnd::InsufficientMaterial,
                SessionStatus::Ongoing => {}
            }
            if config.max_plies > 0 && plies >= config.max_plies {
                break GameEnd::PlyLimit;
            }
            if config.show_board {
                writeln!(out, "{}", render_board(&self.board))?;
            }

            let mover = self.turn;
            let source: &mut dyn MoveSource = match mover {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let Some(mv) = source.choose_move(&self.board, mover) else {
                break GameEnd::Resigned(mover);
            };

            match self.play(mv) {
                Ok(gives_check) => {
                    plies += 1;
                    debug!(player = source.name(), %mv, ply = plies, "move played");
                    writeln!(out, "{} ({mover}) plays {mv}", source.name())?;
                    if gives_check {
                        writeln!(out, "Check!")?;
                    }
                }
                Err(e) if !source.is_automated() => {
                    writeln!(out, "Illegal move: {e}")?;
                }
                Err(e) => bail!("{} proposed illegal move {mv}: {e}", source.name()),
            }
        };

        if config.show_board {
            writeln!(out, "{}", render_board(&self.board))?;
        }
        info!(result = %end, plies, "game over");
        Ok(end)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
