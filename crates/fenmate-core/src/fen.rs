//! FEN string parsing and serialization for [`Position`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse a six-field FEN string into a validated [`Position`].
pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let &[placement, color, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
        return Err(FenError::WrongFieldCount { found: fields.len() });
    };

    let board = parse_placement(placement)?;

    let side_to_move = Color::from_fen(color).ok_or_else(|| FenError::InvalidColor {
        found: color.to_string(),
    })?;

    let castling = CastleRights::from_fen(castling)?;

    let en_passant = match en_passant {
        "-" => None,
        text => Some(Square::from_algebraic(text).ok_or_else(|| FenError::InvalidEnPassant {
            found: text.to_string(),
        })?),
    };

    let halfmove_clock = parse_counter(halfmove, "halfmove clock")?;
    let fullmove_number = parse_counter(fullmove, "fullmove number")?;
    if fullmove_number == 0 {
        return Err(FenError::InvalidMoveCounter {
            field: "fullmove number",
            found: fullmove.to_string(),
        });
    }

    Ok(Position::new(
        board,
        side_to_move,
        castling,
        en_passant,
        halfmove_clock,
        fullmove_number,
    )?)
}

/// Serialize a position as FEN.
pub fn to_fen(pos: &Position) -> String {
    pos.to_string()
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    // FEN lists rank 8 first.
    for (row, text) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut file: usize = 0;

        for c in text.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file += digit as usize;
                continue;
            }

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            if file >= 8 {
                return Err(FenError::BadRankLength {
                    rank: rank as usize + 1,
                    length: file + 1,
                });
            }
            board.put(Square::from_index_unchecked(rank * 8 + file as u8), piece);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::BadRankLength {
                rank: rank as usize + 1,
                length: file,
            });
        }
    }

    Ok(board)
}

fn parse_counter(text: &str, field: &'static str) -> Result<u16, FenError> {
    // `u16::from_str` accepts a leading '+', FEN does not.
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FenError::InvalidMoveCounter { field, found: text.to_string() });
    }
    text.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
        field,
        found: text.to_string(),
    })
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        parse_fen(fen)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty_count = 0u8;

            for file in 0u8..8 {
                let sq = Square::from_index_unchecked(rank * 8 + file);
                match self.piece_on(sq) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling())?;

        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }

        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
