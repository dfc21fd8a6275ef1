//! Error types for FEN parsing, position validation and move application.

use crate::color::Color;
use crate::square::Square;

/// Errors raised while parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The string does not have exactly six whitespace-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },

    /// The placement field does not have exactly eight ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },

    /// A rank describes more or fewer than eight squares.
    #[error("rank {rank} describes {length} squares, expected 8")]
    BadRankLength {
        /// Rank number as printed on the board (8 for the first FEN rank).
        rank: usize,
        length: usize,
    },

    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },

    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },

    #[error("invalid castling field: \"{found}\"")]
    InvalidCastling { found: String },

    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },

    /// The halfmove clock or fullmove number is not a valid counter.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter { field: &'static str, found: String },

    /// The fields parse but describe a structurally broken position.
    #[error("invalid position: {source}")]
    InvalidPosition {
        #[from]
        source: PositionError,
    },
}

/// A side has no king on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no {} king on the board", .color.name())]
pub struct NoKingError {
    pub color: Color,
}

/// Structural violations that make a position unusable for move generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error(transparent)]
    NoKing(#[from] NoKingError),

    #[error("{} has {count} kings", .color.name())]
    TooManyKings { color: Color, count: u32 },

    #[error("pawns found on back rank")]
    PawnsOnBackRank,

    #[error("a square holds more than one piece")]
    OverlappingPieces,

    /// The en passant target is not the empty square behind a pawn that
    /// just made a double push.
    #[error("en passant square {square} does not fit the side to move")]
    MisplacedEnPassant { square: Square },

    /// The side that just moved left its own king attacked.
    #[error("{} is in check but it is not their move", .color.name())]
    OpponentInCheck { color: Color },
}

/// Errors raised when a move cannot be parsed or played.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move is not among the legal moves of the position.
    #[error("illegal move: {mv}")]
    Illegal { mv: String },

    /// The text is not coordinate notation such as `e2e4` or `e7e8q`.
    #[error("malformed move: \"{text}\"")]
    Malformed { text: String },
}
