//! Castling rights and the fixed squares castling involves.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which wing the king castles toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Where the king starts.
    #[inline]
    pub const fn king_source(color: Color) -> Square {
        match color {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        }
    }

    /// Where the king lands.
    #[inline]
    pub const fn king_destination(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => Square::G1,
            (Color::White, CastleSide::QueenSide) => Square::C1,
            (Color::Black, CastleSide::KingSide) => Square::G8,
            (Color::Black, CastleSide::QueenSide) => Square::C8,
        }
    }

    /// The rook's `(from, to)` squares.
    #[inline]
    pub const fn rook_squares(self, color: Color) -> (Square, Square) {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => (Square::H1, Square::F1),
            (Color::White, CastleSide::QueenSide) => (Square::A1, Square::D1),
            (Color::Black, CastleSide::KingSide) => (Square::H8, Square::F8),
            (Color::Black, CastleSide::QueenSide) => (Square::A8, Square::D8),
        }
    }

    /// Squares between king and rook; all must be empty.
    #[inline]
    pub fn empty_path(self, color: Color) -> Bitboard {
        let (rook_from, _) = self.rook_squares(color);
        crate::attacks::between(CastleSide::king_source(color), rook_from)
    }

    /// Squares the king crosses or lands on; none may be attacked.
    #[inline]
    pub const fn king_path(self, color: Color) -> Bitboard {
        let (_, rook_to) = self.rook_squares(color);
        Bitboard::new(
            rook_to.bitboard().inner() | self.king_destination(color).bitboard().inner(),
        )
    }
}

/// Castling rights in 4 bits: 0 = White king side, 1 = White queen side,
/// 2 = Black king side, 3 = Black queen side.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);

    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    pub const WHITE_BOTH: CastleRights = CastleRights(0b0011);
    pub const BLACK_BOTH: CastleRights = CastleRights(0b1100);

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Can `color` still castle toward `side`?
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::flag(color, side))
    }

    /// The single right for a color and side.
    #[inline]
    pub const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    /// Rights lost when a move starts or ends on `sq`.
    #[inline]
    pub const fn revoked_by(sq: Square) -> CastleRights {
        match sq.index() {
            4 => Self::WHITE_BOTH,
            0 => Self::WHITE_QUEEN,
            7 => Self::WHITE_KING,
            60 => Self::BLACK_BOTH,
            56 => Self::BLACK_QUEEN,
            63 => Self::BLACK_KING,
            _ => Self::NONE,
        }
    }

    /// Parse the FEN castling field (`"KQkq"`, `"Kq"`, `"-"`, ...).
    ///
    /// Each letter may appear once.
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        if s.is_empty() {
            return Err(FenError::InvalidCastling { found: s.to_string() });
        }

        let mut rights = CastleRights::NONE;
        for c in s.chars() {
            let flag = match c {
                'K' => Self::WHITE_KING,
                'Q' => Self::WHITE_QUEEN,
                'k' => Self::BLACK_KING,
                'q' => Self::BLACK_QUEEN,
                _ => return Err(FenError::InvalidCastling { found: s.to_string() }),
            };
            if rights.contains(flag) {
                return Err(FenError::InvalidCastling { found: s.to_string() });
            }
            rights = rights.insert(flag);
        }
        Ok(rights)
    }
}

/// Formats as the FEN castling field, always in `KQkq` order.
impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let letters = [
            (Self::WHITE_KING, 'K'),
            (Self::WHITE_QUEEN, 'Q'),
            (Self::BLACK_KING, 'k'),
            (Self::BLACK_QUEEN, 'q'),
        ];
        for (flag, c) in letters {
            if self.contains(flag) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleRights, CastleSide};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn fen_field_roundtrip() {
        for fen in ["KQkq", "Kq", "k", "-", "KQ", "kq"] {
            let rights = CastleRights::from_fen(fen).unwrap();
            assert_eq!(rights.to_string(), fen);
        }
    }

    #[test]
    fn fen_field_is_reordered() {
        assert_eq!(CastleRights::from_fen("qkQK").unwrap().to_string(), "KQkq");
    }

    #[test]
    fn fen_field_rejects_bad_input() {
        for bad in ["KQxq", "1", "", "KK", "-K"] {
            assert!(CastleRights::from_fen(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn has_by_color_and_side() {
        let rights = CastleRights::from_fen("Kq").unwrap();
        assert!(rights.has(Color::White, CastleSide::KingSide));
        assert!(!rights.has(Color::White, CastleSide::QueenSide));
        assert!(!rights.has(Color::Black, CastleSide::KingSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn revocation_squares() {
        assert_eq!(CastleRights::revoked_by(Square::E1), CastleRights::WHITE_BOTH);
        assert_eq!(CastleRights::revoked_by(Square::H8), CastleRights::BLACK_KING);
        assert_eq!(CastleRights::revoked_by(Square::A8), CastleRights::BLACK_QUEEN);
        assert_eq!(CastleRights::revoked_by(Square::E4), CastleRights::NONE);
    }

    #[test]
    fn castling_geometry() {
        let ks = CastleSide::KingSide;
        let qs = CastleSide::QueenSide;
        assert_eq!(ks.king_destination(Color::White), Square::G1);
        assert_eq!(qs.rook_squares(Color::Black), (Square::A8, Square::D8));

        let empty = qs.empty_path(Color::White);
        assert_eq!(empty.count(), 3);
        assert!(empty.contains(Square::B1));

        let path = qs.king_path(Color::White);
        assert_eq!(path.count(), 2);
        assert!(path.contains(Square::C1) && path.contains(Square::D1));
        assert!(!path.contains(Square::B1));

        let path = ks.king_path(Color::Black);
        assert!(path.contains(Square::F8) && path.contains(Square::G8));
    }
}
