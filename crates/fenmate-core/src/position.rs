//! A full game position: placement plus side to move, castling, en passant and counters.

use std::fmt;

use crate::board::{Board, PrettyBoard};
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::PositionError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// A validated position.
///
/// Every `Position` holds exactly one king per side and no pawns on the back
/// ranks. The side not to move is never in check, and an en passant target
/// (if any) is the empty square an enemy pawn just crossed. It may still be
/// unreachable in a real game.
///
/// Positions are plain `Copy` values. Playing a move produces a new one.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    /// Halfmove clock for the fifty-move rule.
    halfmove_clock: u16,
    /// Starts at 1, incremented after Black moves.
    fullmove_number: u16,
}

impl Position {
    /// Validate and assemble a position.
    pub fn new(
        board: Board,
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Result<Position, PositionError> {
        board.validate()?;

        let them = side_to_move.flip();
        if board.is_in_check(them)? {
            return Err(PositionError::OpponentInCheck { color: them });
        }

        if let Some(square) = en_passant {
            // The double-pushed pawn sits just past the empty target square.
            let pawn_behind = square
                .backward(side_to_move)
                .is_some_and(|sq| board.piece_on(sq) == Some(Piece::new(PieceKind::Pawn, them)));
            if square.rank() != Rank::Rank6.relative_to(side_to_move)
                || board.piece_on(square).is_some()
                || !pawn_behind
            {
                return Err(PositionError::MisplacedEnPassant { square });
            }
        }

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// The standard starting position.
    pub fn starting_position() -> Position {
        Position {
            board: Board::starting(),
            side_to_move: Color::White,
            castling: CastleRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.board.piece_on(sq)
    }

    /// The king square of `color`; always present in a validated position.
    pub fn king_square(&self, color: Color) -> Square {
        match self.board.king_square(color) {
            Ok(sq) => sq,
            Err(err) => unreachable!("validated position lost its king: {err}"),
        }
    }

    pub fn pretty(&self) -> PrettyBoard<'_> {
        self.board.pretty()
    }

    #[inline]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting_position()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{self}\")")
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::board::Board;
    use crate::castle_rights::CastleRights;
    use crate::color::Color;
    use crate::error::PositionError;
    use crate::piece::Piece;
    use crate::square::Square;

    fn kings_only() -> Board {
        let mut board = Board::empty();
        board.put(Square::E1, Piece::WHITE_KING);
        board.put(Square::E8, Piece::BLACK_KING);
        board
    }

    #[test]
    fn starting_position_accessors() {
        let pos = Position::starting_position();
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.castling(), CastleRights::ALL);
        assert_eq!(pos.en_passant(), None);
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.fullmove_number(), 1);
        assert_eq!(pos.king_square(Color::Black), Square::E8);
        assert_eq!(pos.piece_on(Square::A1), Some(Piece::WHITE_ROOK));
    }

    #[test]
    fn new_accepts_bare_kings() {
        let pos = Position::new(kings_only(), Color::Black, CastleRights::NONE, None, 3, 40).unwrap();
        assert_eq!(pos.king_square(Color::White), Square::E1);
        assert_eq!(pos.fullmove_number(), 40);
    }

    #[test]
    fn new_rejects_missing_king() {
        let mut board = kings_only();
        board.remove(Square::E8);
        let err = Position::new(board, Color::White, CastleRights::NONE, None, 0, 1).unwrap_err();
        assert!(matches!(err, PositionError::NoKing(_)));
    }

    #[test]
    fn en_passant_rank_must_match_side() {
        let mut white_to_move = kings_only();
        white_to_move.put(Square::D5, Piece::BLACK_PAWN);
        let mut black_to_move = kings_only();
        black_to_move.put(Square::D4, Piece::WHITE_PAWN);

        Position::new(white_to_move, Color::White, CastleRights::NONE, Some(Square::D6), 0, 1).unwrap();
        Position::new(black_to_move, Color::Black, CastleRights::NONE, Some(Square::D3), 0, 1).unwrap();
        assert_eq!(
            Position::new(white_to_move, Color::White, CastleRights::NONE, Some(Square::D3), 0, 1),
            Err(PositionError::MisplacedEnPassant { square: Square::D3 })
        );
        assert_eq!(
            Position::new(black_to_move, Color::Black, CastleRights::NONE, Some(Square::D5), 0, 1),
            Err(PositionError::MisplacedEnPassant { square: Square::D5 })
        );
    }

    #[test]
    fn en_passant_target_must_be_empty_with_pawn_behind() {
        // Right rank, but no black pawn on d5.
        assert_eq!(
            Position::new(kings_only(), Color::White, CastleRights::NONE, Some(Square::D6), 0, 1),
            Err(PositionError::MisplacedEnPassant { square: Square::D6 })
        );

        // The pawn is there but d6 is occupied.
        let mut board = kings_only();
        board.put(Square::D5, Piece::BLACK_PAWN);
        board.put(Square::D6, Piece::BLACK_KNIGHT);
        assert_eq!(
            Position::new(board, Color::White, CastleRights::NONE, Some(Square::D6), 0, 1),
            Err(PositionError::MisplacedEnPassant { square: Square::D6 })
        );

        // A white pawn behind the target is not a capturable victim.
        let mut board = kings_only();
        board.put(Square::D5, Piece::WHITE_PAWN);
        assert!(Position::new(board, Color::White, CastleRights::NONE, Some(Square::D6), 0, 1).is_err());
    }

    #[test]
    fn side_not_to_move_may_not_be_in_check() {
        let mut board = kings_only();
        board.put(Square::E2, Piece::WHITE_ROOK);
        assert_eq!(
            Position::new(board, Color::White, CastleRights::NONE, None, 0, 1),
            Err(PositionError::OpponentInCheck { color: Color::Black })
        );
        // Being in check on your own move is fine.
        Position::new(board, Color::Black, CastleRights::NONE, None, 0, 1).unwrap();
    }

    #[test]
    fn debug_shows_fen() {
        let pos = Position::starting_position();
        assert_eq!(
            format!("{pos:?}"),
            "Position(\"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1\")"
        );
    }
}
