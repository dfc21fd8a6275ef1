//! Perft: leaf counts of the legal move tree, for verifying the move generator.

use crate::chess_move::Move;
use crate::movegen::generate_legal_moves;
use crate::position::Position;

/// Count the leaf nodes `depth` plies below `pos`.
///
/// Depth 0 is the position itself. At depth 1 the legal moves are counted
/// without being played.
pub fn perft(pos: &Position, depth: usize) -> u64 {
    match depth {
        0 => 1,
        1 => generate_legal_moves(pos).len() as u64,
        _ => generate_legal_moves(pos)
            .iter()
            .map(|&mv| perft(&pos.make_move(mv), depth - 1))
            .sum(),
    }
}

/// Leaf count below each legal move, in canonical move order.
///
/// Every entry counts at least the move itself, so depth 0 behaves like 1.
pub fn divide(pos: &Position, depth: usize) -> Vec<(Move, u64)> {
    let mut moves = generate_legal_moves(pos);
    moves.sort();
    moves
        .iter()
        .map(|&mv| (mv, perft(&pos.make_move(mv), depth.saturating_sub(1))))
        .collect()
}
