//! Pin and check detection.

use crate::attacks::{between, bishop_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Compute the pieces checking the side to move and the friendly pieces pinned to its king.
///
/// Returns `(checkers, pinned)`.
pub(crate) fn compute_checkers_and_pinned(pos: &Position) -> (Bitboard, Bitboard) {
    let board = pos.board();
    let us = pos.side_to_move();
    let them = us.flip();
    let king_sq = pos.king_square(us);
    let theirs = board.side(them);

    let mut checkers = knight_attacks(king_sq) & board.pieces(PieceKind::Knight) & theirs;
    checkers |= pawn_attacks(us, king_sq) & board.pieces(PieceKind::Pawn) & theirs;

    // Enemy sliders that would see the king on an empty board.
    let candidates = (bishop_attacks(king_sq, Bitboard::EMPTY) & board.diagonal_sliders(them))
        | (rook_attacks(king_sq, Bitboard::EMPTY) & board.orthogonal_sliders(them));

    let mut pinned = Bitboard::EMPTY;
    for slider in candidates {
        match classify_ray(pos, king_sq, slider) {
            Ray::Check => checkers |= slider.bitboard(),
            Ray::Pin(sq) => pinned |= sq.bitboard(),
            Ray::Blocked => {}
        }
    }

    (checkers, pinned)
}

enum Ray {
    Check,
    Pin(Square),
    Blocked,
}

fn classify_ray(pos: &Position, king_sq: Square, slider: Square) -> Ray {
    let blockers = between(king_sq, slider) & pos.board().occupied();
    match blockers.count() {
        0 => Ray::Check,
        1 => match blockers.lsb() {
            Some(sq) if pos.board().side(pos.side_to_move()).contains(sq) => Ray::Pin(sq),
            _ => Ray::Blocked,
        },
        _ => Ray::Blocked,
    }
}
