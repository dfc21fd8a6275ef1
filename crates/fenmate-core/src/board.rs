//! Piece placement: which piece stands on which square.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::{NoKingError, PositionError};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Piece placement as one bitboard per kind and one per color.
///
/// A `Board` on its own carries no rules state and is not validated, so it
/// may lack kings or hold pawns on the back rank. [`Position`](crate::Position)
/// is the validated wrapper the move generator works on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    pieces: [Bitboard; PieceKind::COUNT],
    sides: [Bitboard; Color::COUNT],
    occupied: Bitboard,
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board {
            pieces: [Bitboard::EMPTY; PieceKind::COUNT],
            sides: [Bitboard::EMPTY; Color::COUNT],
            occupied: Bitboard::EMPTY,
        }
    }

    /// The standard opening placement.
    pub fn starting() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            let file = file as u8;
            board.put(Square::from_index_unchecked(file), Piece::new(kind, Color::White));
            board.put(Square::from_index_unchecked(8 + file), Piece::WHITE_PAWN);
            board.put(Square::from_index_unchecked(48 + file), Piece::BLACK_PAWN);
            board.put(Square::from_index_unchecked(56 + file), Piece::new(kind, Color::Black));
        }
        board
    }

    /// Place `piece` on `sq`, replacing whatever stood there.
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.remove(sq);
        self.toggle(sq, piece.kind(), piece.color());
    }

    /// Clear `sq`, returning the piece that stood there.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_on(sq)?;
        self.toggle(sq, piece.kind(), piece.color());
        Some(piece)
    }

    /// XOR a piece in or out of the bitboards.
    #[inline]
    pub(crate) fn toggle(&mut self, sq: Square, kind: PieceKind, color: Color) {
        let mask = sq.bitboard();
        self.pieces[kind.index()] ^= mask;
        self.sides[color.index()] ^= mask;
        self.occupied = self.sides[Color::White.index()] | self.sides[Color::Black.index()];
    }

    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        Some(Piece::new(self.kind_on(sq)?, self.color_on(sq)?))
    }

    pub fn kind_on(&self, sq: Square) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|&kind| self.pieces[kind.index()].contains(sq))
    }

    pub fn color_on(&self, sq: Square) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.sides[color.index()].contains(sq))
    }

    /// Every piece of `kind`, both colors.
    #[inline]
    pub fn pieces(&self, kind: PieceKind) -> Bitboard {
        self.pieces[kind.index()]
    }

    /// Every piece of `color`.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    /// Pieces of one kind and color.
    #[inline]
    pub fn pieces_of(&self, kind: PieceKind, color: Color) -> Bitboard {
        self.pieces[kind.index()] & self.sides[color.index()]
    }

    /// Bishops and queens of `color`.
    #[inline]
    pub fn diagonal_sliders(&self, color: Color) -> Bitboard {
        (self.pieces(PieceKind::Bishop) | self.pieces(PieceKind::Queen)) & self.side(color)
    }

    /// Rooks and queens of `color`.
    #[inline]
    pub fn orthogonal_sliders(&self, color: Color) -> Bitboard {
        (self.pieces(PieceKind::Rook) | self.pieces(PieceKind::Queen)) & self.side(color)
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    /// Where `color`'s king stands. With several kings the lowest square wins.
    pub fn king_square(&self, color: Color) -> Result<Square, NoKingError> {
        self.pieces_of(PieceKind::King, color)
            .lsb()
            .ok_or(NoKingError { color })
    }

    /// Check the structural rules every playable position obeys.
    pub fn validate(&self) -> Result<(), PositionError> {
        for color in Color::ALL {
            match self.pieces_of(PieceKind::King, color).count() {
                0 => return Err(NoKingError { color }.into()),
                1 => {}
                count => return Err(PositionError::TooManyKings { color, count }),
            }
        }

        if (self.pieces(PieceKind::Pawn) & (Bitboard::RANK_1 | Bitboard::RANK_8)).is_nonempty() {
            return Err(PositionError::PawnsOnBackRank);
        }

        let mut seen = Bitboard::EMPTY;
        for bb in self.pieces {
            if (seen & bb).is_nonempty() {
                return Err(PositionError::OverlappingPieces);
            }
            seen |= bb;
        }
        let white = self.side(Color::White);
        let black = self.side(Color::Black);
        if (white & black).is_nonempty() || seen != (white | black) || self.occupied != seen {
            return Err(PositionError::OverlappingPieces);
        }

        Ok(())
    }

    /// An 8x8 grid view for printing, rank 8 on top.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// Display wrapper drawing a board as a grid of FEN letters.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let sq = Square::from_index_unchecked(rank * 8 + file);
                let c = self.0.piece_on(sq).map_or('.', Piece::fen_char);
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
