//! Castling, shared by both generators.

use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveKind};
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::MoveList;

/// Push every castling move the side to move may make.
///
/// Requires the right, king and rook on their original squares, an empty
/// path between them, the king not in check, and neither the square it
/// crosses nor the one it lands on attacked.
pub(super) fn gen_castling(pos: &Position, list: &mut MoveList) {
    let board = pos.board();
    let us = pos.side_to_move();
    let them = us.flip();
    let king_from = CastleSide::king_source(us);

    if !board.pieces_of(PieceKind::King, us).contains(king_from)
        || board.is_square_attacked(king_from, them)
    {
        return;
    }

    for side in CastleSide::ALL {
        if !pos.castling().has(us, side) {
            continue;
        }
        let (rook_from, _) = side.rook_squares(us);
        if !board.pieces_of(PieceKind::Rook, us).contains(rook_from) {
            continue;
        }
        if (side.empty_path(us) & board.occupied()).is_nonempty() {
            continue;
        }
        if side.king_path(us).any(|sq| board.is_square_attacked(sq, them)) {
            continue;
        }
        let kind = match side {
            CastleSide::KingSide => MoveKind::CastleKingside,
            CastleSide::QueenSide => MoveKind::CastleQueenside,
        };
        list.push(Move::with_kind(king_from, side.king_destination(us), kind));
    }
}
