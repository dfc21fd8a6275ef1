//! Colored pieces packed into one byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A piece of a given kind and color.
///
/// Bits 0-2 hold the [`PieceKind`], bit 3 the [`Color`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color as u8) << 3 | (kind as u8))
    }

    /// Uppercase letters are White, lowercase Black.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        PieceKind::ALL[(self.0 & 0x07) as usize]
    }

    #[inline]
    pub const fn color(self) -> Color {
        Color::ALL[(self.0 >> 3) as usize]
    }

    /// FEN letter, uppercase for White.
    #[inline]
    pub fn fen_char(self) -> char {
        let c = self.kind().fen_char();
        match self.color() {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({})", self.fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn packs_kind_and_color() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.kind(), kind);
                assert_eq!(piece.color(), color);
            }
        }
    }

    #[test]
    fn fen_case_selects_color() {
        assert_eq!(Piece::from_fen_char('N'), Some(Piece::WHITE_KNIGHT));
        assert_eq!(Piece::from_fen_char('n'), Some(Piece::BLACK_KNIGHT));
        assert_eq!(Piece::from_fen_char('K'), Some(Piece::WHITE_KING));
        assert_eq!(Piece::from_fen_char('q'), Some(Piece::BLACK_QUEEN));
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('8'), None);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(Piece::WHITE_ROOK.to_string(), "R");
        assert_eq!(Piece::BLACK_PAWN.to_string(), "p");
        assert_eq!(format!("{:?}", Piece::BLACK_BISHOP), "Piece(b)");
    }
}
