//! Sliding piece (bishop, rook, queen) move generation.

use crate::attacks::{bishop_attacks, line, queen_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::MoveList;

/// Generate legal slider moves.
pub(super) fn gen_sliders(
    pos: &Position,
    king_sq: Square,
    pinned: Bitboard,
    check_mask: Bitboard,
    list: &mut MoveList,
) {
    let board = pos.board();
    let us = pos.side_to_move();
    let friendly = board.side(us);
    let occupied = board.occupied();

    for kind in PieceKind::ALL.into_iter().filter(|kind| kind.is_slider()) {
        for src in board.pieces_of(kind, us) {
            let attacks = match kind {
                PieceKind::Bishop => bishop_attacks(src, occupied),
                PieceKind::Rook => rook_attacks(src, occupied),
                _ => queen_attacks(src, occupied),
            };
            let mut targets = attacks & !friendly & check_mask;
            // Pinned sliders can only move along the pin ray.
            if pinned.contains(src) {
                targets &= line(king_sq, src);
            }
            for dst in targets {
                list.push(Move::new(src, dst));
            }
        }
    }
}
