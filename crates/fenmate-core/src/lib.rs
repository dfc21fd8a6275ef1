//! Chess rules core: board representation, FEN, attack detection, move generation and game status.

pub mod attacks;
mod bitboard;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod detect;
mod error;
mod fen;
mod file;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod rank;
mod square;
mod status;

pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind, PromotionPiece};
pub use color::Color;
pub use error::{FenError, MoveError, NoKingError, PositionError};
pub use fen::{STARTING_FEN, parse_fen, to_fen};
pub use file::File;
pub use movegen::{MoveList, generate_captures, generate_legal_moves, generate_pseudo_moves};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use rank::Rank;
pub use square::Square;
pub use status::{GameState, GameStatus, classify};
