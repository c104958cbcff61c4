use crate::{error::MoveError, types::*};

pub fn move_to_coord(mv: Move) -> String {
    mv.to_string()
}

/// Parse a coordinate move: `e2e4`, `e2 e4`, `e7e8q` or `e7 e8 q`.
pub fn parse_move(text: &str) -> Result<Move, MoveError> {
    let compact: String = text.split_whitespace().collect();
    if compact.len() != 4 && compact.len() != 5 {
        return Err(MoveError::MalformedInput(format!(
            "expected a move like 'e2 e4', got '{}'",
            text.trim()
        )));
    }
    if !compact.is_ascii() {
        return Err(MoveError::MalformedInput(format!("bad move '{}'", text.trim())));
    }
    let from = Square::parse(&compact[0..2])?;
    let to = Square::parse(&compact[2..4])?;
    let promotion = match compact[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_symbol(ch) {
            Some(kind) if kind.is_promotion_target() => Some(kind),
            _ => {
                return Err(MoveError::MalformedInput(format!(
                    "'{ch}' is not a promotion piece"
                )));
            }
        },
    };
    Ok(Move {
        from,
        to,
        promotion,
    })
}

/// Parse an interactive promotion answer: a letter (`q r b n`) or a name.
pub fn parse_promotion_choice(text: &str) -> Result<PieceKind, MoveError> {
    let answer = text.trim().to_ascii_lowercase();
    let kind = match answer.as_str() {
        "q" | "queen" => PieceKind::Queen,
        "r" | "rook" => PieceKind::Rook,
        "b" | "bishop" => PieceKind::Bishop,
        "n" | "knight" => PieceKind::Knight,
        _ => return Err(MoveError::InvalidPromotionChoice(answer)),
    };
    Ok(kind)
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
