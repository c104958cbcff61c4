use chess_core::{Board, Square};

/// Text diagram of the board, rank 8 at the top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in (0..8u8).rev() {
        out.push(char::from(b'1' + row));
        for col in 0..8u8 {
            out.push(' ');
            let ch = Square::new(row, col)
                .ok()
                .and_then(|sq| board.piece_at(sq))
                .map_or('.', |pc| pc.symbol());
            out.push(ch);
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_startpos() {
        let text = render_board(&Board::startpos());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 r n b q k b n r");
        assert_eq!(lines[1], "7 p p p p p p p p");
        assert_eq!(lines[4], "4 . . . . . . . .");
        assert_eq!(lines[7], "1 R N B Q K B N R");
        assert_eq!(lines[8], "  a b c d e f g h");
    }
}
