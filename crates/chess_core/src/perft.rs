use crate::{board::Board, movegen::legal_moves_into, types::*, validate::try_move};

/// Pure perft node count.
/// Counts all legal positions reachable from `board` with `color` to move,
/// down to `depth`. Promotions count once (as a queen).
pub fn perft(board: &Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &Board, color: Color, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let (buf, rest) = match layers.split_first_mut() {
            Some(split) => split,
            None => return 1,
        };

        legal_moves_into(board, color, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            if let Ok((next, _)) = try_move(board, color, mv) {
                nodes += inner(&next, color.other(), depth - 1, rest);
            }
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, color, depth, &mut layers[..])
}
