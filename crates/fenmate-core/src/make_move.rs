//! Move execution via copy-make.

use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::error::MoveError;
use crate::piece_kind::PieceKind;
use crate::position::Position;

impl Position {
    /// Play `mv` and return the resulting position.
    ///
    /// Moves are checked against the legal move list first, so the result is
    /// always a position reachable by a legal move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Illegal`] when `mv` is not legal here.
    pub fn apply_move(&self, mv: Move) -> Result<Position, MoveError> {
        let legal = crate::movegen::generate_legal_moves(self);
        if !legal.contains(mv) {
            return Err(MoveError::Illegal { mv: mv.to_uci() });
        }
        Ok(self.make_move(mv))
    }

    /// Return `true` if `mv` takes a piece, en passant included.
    pub fn is_capture(&self, mv: Move) -> bool {
        mv.is_en_passant()
            || (!mv.is_castle() && self.board().side(self.side_to_move().flip()).contains(mv.dest()))
    }

    /// Copy-make without a legality check. `self` is not modified.
    ///
    /// The caller guarantees `mv` came from a generator for this position.
    /// An empty source square leaves the position unchanged.
    pub(crate) fn make_move(&self, mv: Move) -> Position {
        let mut next = *self;
        let us = self.side_to_move();
        let them = us.flip();
        let src = mv.source();
        let dst = mv.dest();

        let Some(moving) = self.board().kind_on(src) else {
            return next;
        };
        let capture = self.is_capture(mv);

        next.set_en_passant(None);

        {
            let board = next.board_mut();
            match mv.kind() {
                MoveKind::EnPassant => {
                    if let Some(victim) = dst.backward(us) {
                        board.toggle(victim, PieceKind::Pawn, them);
                    }
                }
                MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                    let side = if mv.kind() == MoveKind::CastleKingside {
                        CastleSide::KingSide
                    } else {
                        CastleSide::QueenSide
                    };
                    let (rook_from, rook_to) = side.rook_squares(us);
                    board.toggle(rook_from, PieceKind::Rook, us);
                    board.toggle(rook_to, PieceKind::Rook, us);
                }
                MoveKind::Normal | MoveKind::DoublePawnPush => {
                    if let Some(victim) = board.kind_on(dst) {
                        board.toggle(dst, victim, them);
                    }
                }
            }

            let placed = mv.promotion().map_or(moving, |promo| promo.to_piece_kind());
            board.toggle(src, moving, us);
            board.toggle(dst, placed, us);
        }

        if mv.kind() == MoveKind::DoublePawnPush {
            next.set_en_passant(src.forward(us, 1));
        }

        let rights = self
            .castling()
            .remove(CastleRights::revoked_by(src))
            .remove(CastleRights::revoked_by(dst));
        next.set_castling(rights);

        if moving == PieceKind::Pawn || capture {
            next.set_halfmove_clock(0);
        } else {
            next.set_halfmove_clock(self.halfmove_clock().saturating_add(1));
        }
        if us == Color::Black {
            next.set_fullmove_number(self.fullmove_number().saturating_add(1));
        }
        next.set_side_to_move(them);

        next
    }
}
