//! Attack and check detection.
//!
//! Attacks are found by casting each piece's pattern backward from the
//! target square and intersecting with the attacker's pieces, so nothing
//! here depends on move generation.

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::color::Color;
use crate::error::NoKingError;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

impl Board {
    /// Pieces of `by` attacking `sq`, with sliders seeing through `occupied`.
    ///
    /// Passing a custom occupancy lets callers probe squares as if some piece
    /// (typically the moving king) were already gone.
    pub fn attackers_to(&self, sq: Square, by: Color, occupied: Bitboard) -> Bitboard {
        let them = self.side(by);
        // A pawn of `by` on X attacks `sq` exactly when a pawn of the other
        // color on `sq` would attack X.
        let pawns = pawn_attacks(by.flip(), sq) & self.pieces(PieceKind::Pawn);
        let knights = knight_attacks(sq) & self.pieces(PieceKind::Knight);
        let kings = king_attacks(sq) & self.pieces(PieceKind::King);
        let rooks = rook_attacks(sq, occupied) & (self.pieces(PieceKind::Rook) | self.pieces(PieceKind::Queen));
        let bishops =
            bishop_attacks(sq, occupied) & (self.pieces(PieceKind::Bishop) | self.pieces(PieceKind::Queen));
        (pawns | knights | kings | rooks | bishops) & them
    }

    /// Return `true` if any piece of `by` attacks `sq`.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.is_attacked_through(sq, by, self.occupied())
    }

    /// Early-exit variant of [`attackers_to`](Board::attackers_to).
    pub(crate) fn is_attacked_through(&self, sq: Square, by: Color, occupied: Bitboard) -> bool {
        let them = self.side(by);

        if (knight_attacks(sq) & them & self.pieces(PieceKind::Knight)).is_nonempty() {
            return true;
        }
        if (king_attacks(sq) & them & self.pieces(PieceKind::King)).is_nonempty() {
            return true;
        }
        if (pawn_attacks(by.flip(), sq) & them & self.pieces(PieceKind::Pawn)).is_nonempty() {
            return true;
        }
        if (rook_attacks(sq, occupied) & self.orthogonal_sliders(by)).is_nonempty() {
            return true;
        }
        (bishop_attacks(sq, occupied) & self.diagonal_sliders(by)).is_nonempty()
    }

    /// Is `color`'s king attacked? Fails when that king is missing.
    pub fn is_in_check(&self, color: Color) -> Result<bool, NoKingError> {
        let king = self.king_square(color)?;
        Ok(self.is_square_attacked(king, color.flip()))
    }

    /// Every square `by` attacks, occupied or not.
    pub fn attacked_squares(&self, by: Color) -> Bitboard {
        let occupied = self.occupied();
        let mut attacked = Bitboard::EMPTY;
        for sq in self.side(by) {
            attacked |= match self.kind_on(sq) {
                Some(PieceKind::Pawn) => pawn_attacks(by, sq),
                Some(PieceKind::Knight) => knight_attacks(sq),
                Some(PieceKind::Bishop) => bishop_attacks(sq, occupied),
                Some(PieceKind::Rook) => rook_attacks(sq, occupied),
                Some(PieceKind::Queen) => rook_attacks(sq, occupied) | bishop_attacks(sq, occupied),
                Some(PieceKind::King) => king_attacks(sq),
                None => Bitboard::EMPTY,
            };
        }
        attacked
    }
}

impl Position {
    /// Is the side to move in check?
    pub fn is_in_check(&self) -> bool {
        self.checkers().is_nonempty()
    }

    /// Enemy pieces giving check to the side to move.
    pub fn checkers(&self) -> Bitboard {
        let us = self.side_to_move();
        let board = self.board();
        board.attackers_to(self.king_square(us), us.flip(), board.occupied())
    }

    /// Every square attacked by `by`.
    pub fn attacked_squares(&self, by: Color) -> Bitboard {
        self.board().attacked_squares(by)
    }
}

#[cfg(test)]
mod tests {
    use crate::bitboard::Bitboard;
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::NoKingError;
    use crate::piece::Piece;
    use crate::position::Position;
    use crate::square::Square;

    fn pos(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    #[test]
    fn pawns_attack_diagonally_only() {
        let p = pos("4k3/8/8/8/4p3/8/8/4K3 w - - 0 1");
        let board = p.board();
        assert!(board.is_square_attacked(Square::D3, Color::Black));
        assert!(board.is_square_attacked(Square::F3, Color::Black));
        assert!(!board.is_square_attacked(Square::E3, Color::Black));
        assert!(!board.is_square_attacked(Square::D5, Color::Black));
    }

    #[test]
    fn sliders_are_blocked() {
        let p = pos("4k3/8/8/8/r2P3K/8/8/8 w - - 0 1");
        let board = p.board();
        assert!(board.is_square_attacked(Square::C4, Color::Black));
        assert!(board.is_square_attacked(Square::D4, Color::Black));
        assert!(!board.is_square_attacked(Square::E4, Color::Black));
        assert!(!board.is_square_attacked(Square::H4, Color::Black));
    }

    #[test]
    fn custom_occupancy_sees_through_king() {
        let p = pos("4k3/8/8/8/r3K3/8/8/8 w - - 0 1");
        let board = p.board();
        assert!(!board.is_square_attacked(Square::F4, Color::Black));
        let without_king = board.occupied().without(Square::E4);
        let attackers = board.attackers_to(Square::F4, Color::Black, without_king);
        assert_eq!(attackers, Square::A4.bitboard());
    }

    #[test]
    fn attackers_collects_every_kind() {
        // d4 hit by a pawn (e5), knight (b5), bishop (a7) and rook (d8).
        let p = pos("3rk3/b7/8/1n2p3/8/8/8/4K3 w - - 0 1");
        let attackers = p.board().attackers_to(Square::D4, Color::Black, p.board().occupied());
        let expected: Bitboard = [Square::E5, Square::B5, Square::A7, Square::D8].into_iter().collect();
        assert_eq!(attackers, expected);
        assert!(p.board().attackers_to(Square::D4, Color::White, p.board().occupied()).is_empty());
    }

    #[test]
    fn checkers_and_check_flag() {
        let p = pos("4k3/8/8/8/8/5n2/8/r3K3 w - - 0 1");
        assert!(p.is_in_check());
        assert_eq!(p.checkers().count(), 2);

        let p = Position::starting_position();
        assert!(!p.is_in_check());
        assert!(p.checkers().is_empty());
    }

    #[test]
    fn board_check_without_king_is_an_error() {
        let mut board = Board::empty();
        board.put(Square::E1, Piece::WHITE_KING);
        board.put(Square::E8, Piece::BLACK_ROOK);
        assert_eq!(board.is_in_check(Color::White), Ok(true));
        assert_eq!(board.is_in_check(Color::Black), Err(NoKingError { color: Color::Black }));
    }

    #[test]
    fn attacked_squares_from_start() {
        let p = Position::starting_position();
        let white = p.attacked_squares(Color::White);
        // Pawns cover all of rank 3; nothing reaches rank 4.
        assert_eq!(white & Bitboard::RANK_3, Bitboard::RANK_3);
        assert!((white & Bitboard::RANK_4).is_empty());
        // The rooks defend b1 and g1 but a1/h1 are covered by nothing.
        assert!(!white.contains(Square::A1));
        assert!(white.contains(Square::B1));
        assert_eq!(white.count(), 22);
    }
}
