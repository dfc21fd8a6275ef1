//! Attack sets for every piece type.
//!
//! Leapers read precomputed tables. Sliders cast each ray from the source
//! square and cut it at the first occupied square, which stays included.

mod tables;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::square::Square;

use self::tables::{
    BETWEEN, EAST, KING_ATTACKS, KNIGHT_ATTACKS, LINE, NORTH, NORTH_EAST, NORTH_WEST,
    PAWN_ATTACKS, RAYS, SOUTH, SOUTH_EAST, SOUTH_WEST, WEST,
};

#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Squares a pawn of `color` standing on `sq` captures on.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Ray toward increasing indices, stopped at the nearest blocker.
#[inline]
fn ray_up(dir: usize, sq: Square, occupied: Bitboard) -> Bitboard {
    let ray = RAYS[dir][sq.index()];
    match (ray & occupied).lsb() {
        Some(blocker) => ray ^ RAYS[dir][blocker.index()],
        None => ray,
    }
}

/// Ray toward decreasing indices, stopped at the nearest blocker.
#[inline]
fn ray_down(dir: usize, sq: Square, occupied: Bitboard) -> Bitboard {
    let ray = RAYS[dir][sq.index()];
    match (ray & occupied).msb() {
        Some(blocker) => ray ^ RAYS[dir][blocker.index()],
        None => ray,
    }
}

/// Rook attacks from `sq` through `occupied`.
#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_up(NORTH, sq, occupied)
        | ray_up(EAST, sq, occupied)
        | ray_down(SOUTH, sq, occupied)
        | ray_down(WEST, sq, occupied)
}

/// Bishop attacks from `sq` through `occupied`.
#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_up(NORTH_EAST, sq, occupied)
        | ray_up(NORTH_WEST, sq, occupied)
        | ray_down(SOUTH_WEST, sq, occupied)
        | ray_down(SOUTH_EAST, sq, occupied)
}

#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

/// Squares strictly between two aligned squares; empty when not aligned.
#[inline]
pub fn between(a: Square, b: Square) -> Bitboard {
    BETWEEN[a.index()][b.index()]
}

/// The full edge-to-edge line through two aligned squares; empty when not aligned.
#[inline]
pub fn line(a: Square, b: Square) -> Bitboard {
    LINE[a.index()][b.index()]
}
