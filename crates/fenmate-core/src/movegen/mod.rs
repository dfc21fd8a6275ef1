//! Move generation: a pin-aware legal generator and a geometry-only pseudo-legal one.

mod castling;
mod check;
mod king;
mod knights;
mod pawns;
mod pins;
mod pseudo;
mod sliders;

use crate::attacks::between;
use crate::bitboard::Bitboard;
use crate::chess_move::Move;
use crate::position::Position;

use self::check::{InCheck, NotInCheck};
use self::king::gen_king;
use self::knights::gen_knights;
use self::pawns::gen_pawns;
use self::pins::compute_checkers_and_pinned;
use self::sliders::gen_sliders;

pub use self::pseudo::generate_pseudo_moves;

/// Stack-allocated buffer for generated moves. Capacity 256 covers the theoretical max of 218.
pub struct MoveList {
    moves: [Move; 256],
    len: u16,
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; 256],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < 256);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    /// Sort into the canonical move order (see [`Move`]).
    pub fn sort(&mut self) {
        self.moves[..self.len as usize].sort_unstable();
    }

    /// Keep only the moves matching `keep`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(Move) -> bool) {
        let mut kept = 0;
        for i in 0..self.len as usize {
            let mv = self.moves[i];
            if keep(mv) {
                self.moves[kept] = mv;
                kept += 1;
            }
        }
        self.len = kept as u16;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Generate all legal moves for the side to move.
pub fn generate_legal_moves(pos: &Position) -> MoveList {
    let mut list = MoveList::new();
    let us = pos.side_to_move();
    let king_sq = pos.king_square(us);
    let (checkers, pinned) = compute_checkers_and_pinned(pos);

    match checkers.count() {
        0 => {
            let check_mask = Bitboard::FULL;
            gen_pawns::<NotInCheck>(pos, king_sq, pinned, check_mask, &mut list);
            gen_knights(pos, pinned, check_mask, &mut list);
            gen_sliders(pos, king_sq, pinned, check_mask, &mut list);
            gen_king(pos, king_sq, true, &mut list);
        }
        1 => {
            // Non-king moves must capture the checker or block its ray.
            let check_mask = checkers.lsb().map_or(checkers, |checker| between(king_sq, checker) | checkers);
            gen_pawns::<InCheck>(pos, king_sq, pinned, check_mask, &mut list);
            gen_knights(pos, pinned, check_mask, &mut list);
            gen_sliders(pos, king_sq, pinned, check_mask, &mut list);
            gen_king(pos, king_sq, false, &mut list);
        }
        _ => {
            // Double check: only the king can move.
            gen_king(pos, king_sq, false, &mut list);
        }
    }

    list
}

/// Legal moves that capture (en passant included) or promote.
pub fn generate_captures(pos: &Position) -> MoveList {
    let mut list = generate_legal_moves(pos);
    list.retain(|mv| mv.is_promotion() || pos.is_capture(mv));
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_move::{MoveKind, PromotionPiece};
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn pos(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    #[test]
    fn starting_position_20_moves() {
        let moves = generate_legal_moves(&Position::starting_position());
        assert_eq!(moves.len(), 20, "starting position should have 20 legal moves");
        let doubles = moves.iter().filter(|m| m.kind() == MoveKind::DoublePawnPush).count();
        assert_eq!(doubles, 8);
    }

    #[test]
    fn pinned_knight_zero_moves() {
        // Knight on e2 pinned against the king by the rook on e8.
        let p = pos("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let moves = generate_legal_moves(&p);
        assert!(moves.iter().all(|m| m.source() != Square::E2));
    }

    #[test]
    fn pinned_rook_slides_along_pin() {
        let p = pos("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1");
        let mut rook: Vec<Square> = generate_legal_moves(&p)
            .iter()
            .filter(|m| m.source() == Square::E2)
            .map(|m| m.dest())
            .collect();
        rook.sort();
        assert_eq!(
            rook,
            [Square::E3, Square::E4, Square::E5, Square::E6, Square::E7, Square::E8]
        );
    }

    #[test]
    fn double_check_king_only() {
        let p = pos("4r1k1/8/8/8/8/5n2/8/4K3 w - - 0 1");
        let moves = generate_legal_moves(&p);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert_eq!(p.board().kind_on(mv.source()), Some(PieceKind::King), "{mv} is not a king move");
        }
    }

    #[test]
    fn single_check_block_or_capture() {
        // Rook on e8 checks; the bishop on b5 can block on e2 or take the rook.
        let p = pos("4r1k1/8/8/1B6/8/8/8/4K3 w - - 0 1");
        let bishop: Vec<Square> = generate_legal_moves(&p)
            .iter()
            .filter(|m| m.source() == Square::B5)
            .map(|m| m.dest())
            .collect();
        assert_eq!(bishop, [Square::E2, Square::E8]);
    }

    #[test]
    fn king_cannot_retreat_along_check_ray() {
        let p = pos("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        let moves = generate_legal_moves(&p);
        assert!(!moves.contains(Move::new(Square::E1, Square::F1)));
        assert!(moves.contains(Move::new(Square::E1, Square::E2)));
    }

    #[test]
    fn castling_not_through_check() {
        // Bishop on a6 covers f1.
        let p = pos("4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1");
        let moves = generate_legal_moves(&p);
        assert!(!moves.contains(Move::with_kind(Square::E1, Square::G1, MoveKind::CastleKingside)));
        assert!(moves.contains(Move::with_kind(Square::E1, Square::C1, MoveKind::CastleQueenside)));
    }

    #[test]
    fn en_passant_legal() {
        let p = pos("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let ep = generate_legal_moves(&p).iter().filter(|m| m.is_en_passant()).count();
        assert_eq!(ep, 1);
    }

    #[test]
    fn en_passant_discovered_check_illegal() {
        // bxc6 would clear the fifth rank between the king on a5 and the rook on h5.
        let p = pos("4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1");
        let ep = generate_legal_moves(&p).iter().filter(|m| m.is_en_passant()).count();
        assert_eq!(ep, 0);
    }

    #[test]
    fn en_passant_resolves_pawn_check() {
        // The d5 pawn that just moved gives check; exd6 removes it.
        let p = pos("8/8/8/3pP3/4K3/8/8/7k w - d6 0 1");
        assert!(p.is_in_check());
        let moves = generate_legal_moves(&p);
        assert!(moves.contains(Move::with_kind(Square::E5, Square::D6, MoveKind::EnPassant)));
    }

    #[test]
    fn promotion_generates_4_moves() {
        let p = pos("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let promos: Vec<PromotionPiece> = generate_legal_moves(&p).iter().filter_map(|m| m.promotion()).collect();
        assert_eq!(promos.len(), 4);
    }

    #[test]
    fn captures_only() {
        let p = pos("4k3/P7/8/3pP3/8/2n5/1P6/4K3 w - d6 0 1");
        let mut caps = generate_captures(&p);
        caps.sort();
        let text: Vec<String> = caps.iter().map(|m| m.to_uci()).collect();
        assert_eq!(text, ["b2c3", "e5d6", "a7a8n", "a7a8b", "a7a8r", "a7a8q"]);
    }

    #[test]
    fn sort_and_retain() {
        let mut list = generate_legal_moves(&Position::starting_position());
        list.sort();
        assert_eq!(list[0], Move::new(Square::B1, Square::A3));
        assert!(list.as_slice().windows(2).all(|w| w[0] < w[1]));
        list.retain(|m| m.source() == Square::G1);
        assert_eq!(list.len(), 2);
    }
}
