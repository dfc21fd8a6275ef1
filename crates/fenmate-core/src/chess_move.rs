//! Chess move representation, bit-packed into a u16.

use std::cmp::Ordering;
use std::fmt;

use crate::error::MoveError;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

const SRC_MASK: u16 = 0x003F;
const DST_MASK: u16 = 0x0FC0;
const FLAG_MASK: u16 = 0xF000;
const DST_SHIFT: u32 = 6;
const FLAG_SHIFT: u32 = 12;

/// Flag nibble values at or above this mark a promotion.
const PROMO_FLAG: u16 = 0b1000;

/// The special-move tag a move carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum MoveKind {
    /// Quiet moves, captures and promotions.
    Normal = 0,
    DoublePawnPush = 1,
    CastleKingside = 2,
    CastleQueenside = 3,
    EnPassant = 4,
}

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
}

impl PromotionPiece {
    /// All promotion pieces in index order.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    /// Lowercase letter used in coordinate notation.
    pub const fn uci_char(self) -> char {
        match self {
            PromotionPiece::Knight => 'n',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Queen => 'q',
        }
    }

    pub const fn from_uci_char(c: char) -> Option<PromotionPiece> {
        match c {
            'n' => Some(PromotionPiece::Knight),
            'b' => Some(PromotionPiece::Bishop),
            'r' => Some(PromotionPiece::Rook),
            'q' => Some(PromotionPiece::Queen),
            _ => None,
        }
    }
}

/// A chess move encoded in 16 bits.
///
/// ```text
/// bits  0-5:  source square      (0-63)
/// bits  6-11: destination square (0-63)
/// bits 12-15: flag nibble
///             0 normal, 1 double pawn push, 2 castle kingside,
///             3 castle queenside, 4 en passant,
///             8-11 promotion to knight, bishop, rook, queen
/// ```
///
/// Moves order by source, then destination, then promotion piece (none
/// first), then tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Placeholder (a1a1) used to fill unused buffer slots. Never legal.
    pub const NULL: Move = Move(0);

    const fn pack(source: Square, dest: Square, flag: u16) -> Move {
        Move((source.index() as u16) | ((dest.index() as u16) << DST_SHIFT) | (flag << FLAG_SHIFT))
    }

    /// A quiet move or capture.
    pub const fn new(source: Square, dest: Square) -> Move {
        Move::pack(source, dest, MoveKind::Normal as u16)
    }

    /// A move carrying a special tag.
    pub const fn with_kind(source: Square, dest: Square, kind: MoveKind) -> Move {
        Move::pack(source, dest, kind as u16)
    }

    pub const fn new_promotion(source: Square, dest: Square, promo: PromotionPiece) -> Move {
        Move::pack(source, dest, PROMO_FLAG | promo as u16)
    }

    #[inline]
    pub const fn source(self) -> Square {
        Square::from_index_unchecked((self.0 & SRC_MASK) as u8)
    }

    #[inline]
    pub const fn dest(self) -> Square {
        Square::from_index_unchecked(((self.0 & DST_MASK) >> DST_SHIFT) as u8)
    }

    #[inline]
    const fn flag(self) -> u16 {
        (self.0 & FLAG_MASK) >> FLAG_SHIFT
    }

    /// The special tag; promotions report [`MoveKind::Normal`].
    pub const fn kind(self) -> MoveKind {
        match self.flag() {
            1 => MoveKind::DoublePawnPush,
            2 => MoveKind::CastleKingside,
            3 => MoveKind::CastleQueenside,
            4 => MoveKind::EnPassant,
            _ => MoveKind::Normal,
        }
    }

    pub const fn promotion(self) -> Option<PromotionPiece> {
        let flag = self.flag();
        if flag < PROMO_FLAG {
            return None;
        }
        Some(PromotionPiece::ALL[(flag & 0b11) as usize])
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.flag() >= PROMO_FLAG
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.flag() == MoveKind::EnPassant as u16
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind(), MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Coordinate notation such as `e2e4` or `e7e8q`.
    pub fn to_uci(self) -> String {
        self.to_string()
    }

    /// Parse coordinate notation against `pos`, recovering the special tag.
    ///
    /// Fails with [`MoveError::Malformed`] when the text is not of the form
    /// `<from><to>[n|b|r|q]`, and with [`MoveError::Illegal`] when no legal
    /// move of `pos` matches it.
    pub fn from_uci(text: &str, pos: &Position) -> Result<Move, MoveError> {
        let malformed = || MoveError::Malformed { text: text.to_string() };

        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(malformed());
        }
        let source = Square::from_algebraic(&text[0..2]).ok_or_else(malformed)?;
        let dest = Square::from_algebraic(&text[2..4]).ok_or_else(malformed)?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => Some(PromotionPiece::from_uci_char(c).ok_or_else(malformed)?),
        };

        crate::movegen::generate_legal_moves(pos)
            .as_slice()
            .iter()
            .copied()
            .find(|mv| mv.source() == source && mv.dest() == dest && mv.promotion() == promotion)
            .ok_or_else(|| MoveError::Illegal { mv: text.to_string() })
    }

    /// Key realising the canonical order.
    #[inline]
    fn sort_key(self) -> (Square, Square, u8, MoveKind) {
        let promo = match self.promotion() {
            None => 0,
            Some(piece) => piece as u8 + 1,
        };
        (self.source(), self.dest(), promo, self.kind())
    }
}

impl Ord for Move {
    fn cmp(&self, other: &Move) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Move) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.promotion() {
            Some(promo) => write!(f, "{}{}{}", self.source(), self.dest(), promo.uci_char()),
            None => write!(f, "{}{}", self.source(), self.dest()),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?})", self, self.kind())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Move, MoveKind, PromotionPiece};
    use crate::error::MoveError;
    use crate::position::Position;
    use crate::square::Square;

    #[test]
    fn size_of_move() {
        assert_eq!(std::mem::size_of::<Move>(), 2);
    }

    #[test]
    fn normal_move_fields() {
        let mv = Move::new(Square::E2, Square::E3);
        assert_eq!(mv.source(), Square::E2);
        assert_eq!(mv.dest(), Square::E3);
        assert_eq!(mv.kind(), MoveKind::Normal);
        assert_eq!(mv.promotion(), None);
        assert!(!mv.is_castle() && !mv.is_en_passant() && !mv.is_null());
    }

    #[test]
    fn tags_survive_packing() {
        let cases = [
            (Square::E2, Square::E4, MoveKind::DoublePawnPush),
            (Square::E1, Square::G1, MoveKind::CastleKingside),
            (Square::E8, Square::C8, MoveKind::CastleQueenside),
            (Square::E5, Square::D6, MoveKind::EnPassant),
        ];
        for (src, dst, kind) in cases {
            let mv = Move::with_kind(src, dst, kind);
            assert_eq!(mv.source(), src);
            assert_eq!(mv.dest(), dst);
            assert_eq!(mv.kind(), kind);
            assert_eq!(mv.promotion(), None);
        }
        assert!(Move::with_kind(Square::E1, Square::C1, MoveKind::CastleQueenside).is_castle());
    }

    #[test]
    fn promotions_carry_normal_tag() {
        for promo in PromotionPiece::ALL {
            let mv = Move::new_promotion(Square::H7, Square::H8, promo);
            assert_eq!(mv.dest(), Square::H8);
            assert_eq!(mv.kind(), MoveKind::Normal);
            assert_eq!(mv.promotion(), Some(promo));
            assert!(mv.is_promotion());
        }
    }

    #[test]
    fn uci_text() {
        assert_eq!(Move::new(Square::G1, Square::F3).to_uci(), "g1f3");
        let mv = Move::new_promotion(Square::A2, Square::A1, PromotionPiece::Knight);
        assert_eq!(mv.to_string(), "a2a1n");
    }

    #[test]
    fn canonical_order() {
        let quiet = Move::new(Square::B7, Square::B8);
        let knight = Move::new_promotion(Square::B7, Square::B8, PromotionPiece::Knight);
        let queen = Move::new_promotion(Square::B7, Square::B8, PromotionPiece::Queen);
        let later_dest = Move::new(Square::B7, Square::C8);
        let later_src = Move::new(Square::C1, Square::A1);
        let mut moves = vec![later_src, queen, later_dest, knight, quiet];
        moves.sort();
        assert_eq!(moves, [quiet, knight, queen, later_dest, later_src]);
    }

    #[test]
    fn equality_and_hash() {
        let mut set = HashSet::new();
        set.insert(Move::new(Square::E2, Square::E3));
        set.insert(Move::new(Square::E2, Square::E3));
        assert_eq!(set.len(), 1);
        set.insert(Move::with_kind(Square::E2, Square::E4, MoveKind::DoublePawnPush));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn from_uci_recovers_tags() {
        let pos = Position::starting_position();
        let mv = Move::from_uci("e2e4", &pos).unwrap();
        assert_eq!(mv.kind(), MoveKind::DoublePawnPush);

        let pos: Position = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
        let mv = Move::from_uci("e1c1", &pos).unwrap();
        assert_eq!(mv.kind(), MoveKind::CastleQueenside);

        let pos: Position = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let mv = Move::from_uci("a7a8r", &pos).unwrap();
        assert_eq!(mv.promotion(), Some(PromotionPiece::Rook));
    }

    #[test]
    fn from_uci_errors() {
        let pos = Position::starting_position();
        for bad in ["", "e2", "e2e", "e2e4e5", "z2e4", "e2e9", "e7e8k", "e2e4é"] {
            assert!(
                matches!(Move::from_uci(bad, &pos), Err(MoveError::Malformed { .. })),
                "{bad:?} should be malformed"
            );
        }
        assert_eq!(
            Move::from_uci("e2e5", &pos),
            Err(MoveError::Illegal { mv: "e2e5".to_string() })
        );
        // A promotion letter on a non-promoting move matches nothing.
        assert!(matches!(Move::from_uci("e2e4q", &pos), Err(MoveError::Illegal { .. })));
    }
}
