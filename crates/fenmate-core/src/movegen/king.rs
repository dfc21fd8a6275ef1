//! King move generation.

use crate::attacks::king_attacks;
use crate::chess_move::Move;
use crate::position::Position;
use crate::square::Square;

use super::MoveList;
use super::castling::gen_castling;

/// Generate legal king steps, plus castling when `castle` is set.
pub(super) fn gen_king(pos: &Position, king_sq: Square, castle: bool, list: &mut MoveList) {
    let board = pos.board();
    let us = pos.side_to_move();
    let them = us.flip();

    // Without the king on the board, sliders see through its current square,
    // so stepping back along a checking ray is caught.
    let occupied_no_king = board.occupied().without(king_sq);

    for dst in king_attacks(king_sq) & !board.side(us) {
        if !board.is_attacked_through(dst, them, occupied_no_king) {
            list.push(Move::new(king_sq, dst));
        }
    }

    if castle {
        gen_castling(pos, list);
    }
}
