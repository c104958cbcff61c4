//! Interactive player reading coordinate moves from a text stream

use chess_core::{
    parse_move, parse_promotion_choice, Board, Color, Move, MoveSource, PieceKind,
};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::warn;

/// Line input that several players can share (two people at one terminal).
pub type SharedInput = Rc<RefCell<dyn BufRead>>;

/// A person typing moves such as `e2 e4`.
///
/// Typing `quit` or `resign`, or closing the input, gives up the game.
pub struct HumanPlayer<W: Write> {
    name: String,
    input: SharedInput,
    output: W,
}

impl<W: Write> HumanPlayer<W> {
    pub fn new(name: &str, input: SharedInput, output: W) -> Self {
        Self {
            name: name.to_string(),
            input,
            output,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                warn!(error = %e, "failed to read player input");
                None
            }
        }
    }

    /// Ask which piece to promote to; anything unusable becomes a queen.
    fn ask_promotion(&mut self) -> PieceKind {
        write!(self.output, "Promote to (q/r/b/n): ").ok();
        self.output.flush().ok();
        let answer = self.read_line().unwrap_or_default();
        match parse_promotion_choice(&answer) {
            Ok(kind) => kind,
            Err(e) => {
                writeln!(self.output, "{e}; promoting to a queen").ok();
                PieceKind::Queen
            }
        }
    }
}

fn reaches_last_rank(board: &Board, color: Color, mv: Move) -> bool {
    matches!(
        board.piece_at(mv.from),
        Some(pc) if pc.color == color && pc.kind == PieceKind::Pawn
    ) && mv.to.row() == color.last_row()
}

impl<W: Write> MoveSource for HumanPlayer<W> {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        loop {
            write!(self.output, "{color}'s move (e.g. 'e2 e4'): ").ok();
            self.output.flush().ok();

            let line = self.read_line()?;
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("resign") {
                return None;
            }

            let mut mv = match parse_move(text) {
                Ok(mv) => mv,
                Err(e) => {
                    writeln!(self.output, "{e}").ok();
                    continue;
                }
            };
            if mv.promotion.is_none() && reaches_last_rank(board, color, mv) {
                mv.promotion = Some(self.ask_promotion());
            }
            return Some(mv);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
