//! Pseudo-legal generation: piece geometry only.
//!
//! Moves may leave the mover's king in check. Castling is the exception: it
//! is only produced when fully legal, since its conditions are part of the
//! move's geometry.

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::chess_move::{Move, MoveKind};
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::rank::Rank;

use super::MoveList;
use super::castling::gen_castling;
use super::pawns::push_pawn_move;

/// Generate every pseudo-legal move for the side to move.
pub fn generate_pseudo_moves(pos: &Position) -> MoveList {
    let mut list = MoveList::new();
    let board = pos.board();
    let us = pos.side_to_move();
    let them = us.flip();
    let friendly = board.side(us);
    let enemy = board.side(them);
    let occupied = board.occupied();
    let promo_rank = Bitboard::rank_mask(Rank::Rank8.relative_to(us));
    let start_rank = Bitboard::rank_mask(Rank::Rank2.relative_to(us));

    for src in board.pieces_of(PieceKind::Pawn, us) {
        if let Some(one) = src.forward(us, 1)
            && !occupied.contains(one)
        {
            push_pawn_move(src, one, promo_rank, &mut list);
            if start_rank.contains(src)
                && let Some(two) = src.forward(us, 2)
                && !occupied.contains(two)
            {
                list.push(Move::with_kind(src, two, MoveKind::DoublePawnPush));
            }
        }

        for dst in pawn_attacks(us, src) & enemy {
            push_pawn_move(src, dst, promo_rank, &mut list);
        }

        if let Some(ep_sq) = pos.en_passant()
            && pawn_attacks(us, src).contains(ep_sq)
        {
            list.push(Move::with_kind(src, ep_sq, MoveKind::EnPassant));
        }
    }

    for kind in [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen, PieceKind::King] {
        for src in board.pieces_of(kind, us) {
            let attacks = match kind {
                PieceKind::Knight => knight_attacks(src),
                PieceKind::Bishop => bishop_attacks(src, occupied),
                PieceKind::Rook => rook_attacks(src, occupied),
                PieceKind::Queen => queen_attacks(src, occupied),
                _ => king_attacks(src),
            };
            for dst in attacks & !friendly {
                list.push(Move::new(src, dst));
            }
        }
    }

    gen_castling(pos, &mut list);

    list
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::generate_pseudo_moves;
    use crate::chess_move::Move;
    use crate::movegen::generate_legal_moves;
    use crate::position::Position;
    use crate::square::Square;

    /// Pseudo moves that do not leave the mover's king attacked.
    fn filtered(pos: &Position) -> BTreeSet<Move> {
        let us = pos.side_to_move();
        generate_pseudo_moves(pos)
            .iter()
            .copied()
            .filter(|&mv| {
                let next = pos.make_move(mv);
                next.board().is_in_check(us) == Ok(false)
            })
            .collect()
    }

    fn legal(pos: &Position) -> BTreeSet<Move> {
        generate_legal_moves(pos).iter().copied().collect()
    }

    /// Compare both generators at every node of the tree down to `depth`.
    fn agree(pos: &Position, depth: u32) {
        let legal = legal(pos);
        assert_eq!(legal, filtered(pos), "generators disagree on {pos}");
        if depth > 1 {
            for &mv in &legal {
                agree(&pos.make_move(mv), depth - 1);
            }
        }
    }

    #[test]
    fn start_position_pseudo_count() {
        assert_eq!(generate_pseudo_moves(&Position::starting_position()).len(), 20);
    }

    #[test]
    fn pseudo_includes_self_check() {
        // The e2 knight is pinned; geometry still lets it jump.
        let pos: Position = "4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1".parse().unwrap();
        let pseudo = generate_pseudo_moves(&pos);
        assert!(pseudo.contains(Move::new(Square::E2, Square::C3)));
        assert!(!generate_legal_moves(&pos).contains(Move::new(Square::E2, Square::C3)));
    }

    #[test]
    fn legal_equals_filtered_pseudo() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            "4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1",
        ];
        for fen in fens {
            let pos: Position = fen.parse().unwrap();
            agree(&pos, 2);
        }
    }
}
