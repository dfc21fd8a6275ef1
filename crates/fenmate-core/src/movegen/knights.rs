//! Knight move generation.

use crate::attacks::knight_attacks;
use crate::bitboard::Bitboard;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::MoveList;

/// Generate legal knight moves.
pub(super) fn gen_knights(pos: &Position, pinned: Bitboard, check_mask: Bitboard, list: &mut MoveList) {
    let us = pos.side_to_move();
    let friendly = pos.board().side(us);

    // A pinned knight can never stay on its pin line.
    let knights = pos.board().pieces_of(PieceKind::Knight, us) & !pinned;
    for src in knights {
        for dst in knight_attacks(src) & !friendly & check_mask {
            list.push(Move::new(src, dst));
        }
    }
}
