//! Pawn move generation.

use crate::attacks::{bishop_attacks, line, pawn_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::chess_move::{Move, MoveKind, PromotionPiece};
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::rank::Rank;
use crate::square::Square;

use super::MoveList;
use super::check::CheckType;

/// Push `src -> dst`, expanding to the four promotions on the last rank.
pub(super) fn push_pawn_move(src: Square, dst: Square, promo_rank: Bitboard, list: &mut MoveList) {
    if promo_rank.contains(dst) {
        for promo in PromotionPiece::ALL {
            list.push(Move::new_promotion(src, dst, promo));
        }
    } else {
        list.push(Move::new(src, dst));
    }
}

/// Generate legal pawn moves.
pub(super) fn gen_pawns<T: CheckType>(
    pos: &Position,
    king_sq: Square,
    pinned: Bitboard,
    check_mask: Bitboard,
    list: &mut MoveList,
) {
    let board = pos.board();
    let us = pos.side_to_move();
    let them = us.flip();
    let enemy = board.side(them);
    let empty = !board.occupied();
    let our_pawns = board.pieces_of(PieceKind::Pawn, us);
    let promo_rank = Bitboard::rank_mask(Rank::Rank8.relative_to(us));
    let double_rank = Bitboard::rank_mask(Rank::Rank4.relative_to(us));

    // A pinned pawn may only move along the line through its king.
    let stays_on_pin = |src: Square, dst: Square| !pinned.contains(src) || line(king_sq, src).contains(dst);

    // --- Pushes ---
    let single_push = our_pawns.forward(us) & empty;
    for dst in single_push & check_mask {
        let Some(src) = dst.backward(us) else { continue };
        if stays_on_pin(src, dst) {
            push_pawn_move(src, dst, promo_rank, list);
        }
    }

    let double_push = single_push.forward(us) & empty & double_rank & check_mask;
    for dst in double_push {
        let Some(src) = dst.backward(us).and_then(|mid| mid.backward(us)) else {
            continue;
        };
        if stays_on_pin(src, dst) {
            list.push(Move::with_kind(src, dst, MoveKind::DoublePawnPush));
        }
    }

    // --- Captures ---
    for src in our_pawns {
        for dst in pawn_attacks(us, src) & enemy & check_mask {
            if stays_on_pin(src, dst) {
                push_pawn_move(src, dst, promo_rank, list);
            }
        }
    }

    // --- En passant ---
    let Some(ep_sq) = pos.en_passant() else { return };
    let Some(victim) = ep_sq.backward(us) else { return };

    for src in pawn_attacks(them, ep_sq) & our_pawns {
        // In check, the capture must remove the checker or land on the block square.
        if T::IN_CHECK && !check_mask.contains(ep_sq) && !check_mask.contains(victim) {
            continue;
        }
        if !stays_on_pin(src, ep_sq) {
            continue;
        }
        // Both pawns leave their squares at once, which can uncover a slider
        // along the rank (or a diagonal) that no pin test sees.
        let after = (board.occupied() ^ src.bitboard() ^ victim.bitboard()) | ep_sq.bitboard();
        let exposed = (rook_attacks(king_sq, after) & board.orthogonal_sliders(them))
            | (bishop_attacks(king_sq, after) & board.diagonal_sliders(them));
        if exposed.is_nonempty() {
            continue;
        }
        list.push(Move::with_kind(src, ep_sq, MoveKind::EnPassant));
    }
}
