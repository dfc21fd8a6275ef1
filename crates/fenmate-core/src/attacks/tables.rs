//! Compile-time leaper, ray and line tables.

use crate::bitboard::Bitboard;

/// The eight ray directions as `(d_rank, d_file)`.
///
/// The first four point toward higher square indices, so the nearest blocker
/// on them is the least significant bit; the last four point the other way.
pub(crate) const DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),   // north
    (0, 1),   // east
    (1, 1),   // north-east
    (1, -1),  // north-west
    (-1, 0),  // south
    (0, -1),  // west
    (-1, -1), // south-west
    (-1, 1),  // south-east
];

pub(crate) const NORTH: usize = 0;
pub(crate) const EAST: usize = 1;
pub(crate) const NORTH_EAST: usize = 2;
pub(crate) const NORTH_WEST: usize = 3;
pub(crate) const SOUTH: usize = 4;
pub(crate) const WEST: usize = 5;
pub(crate) const SOUTH_WEST: usize = 6;
pub(crate) const SOUTH_EAST: usize = 7;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

const fn on_board(rank: i8, file: i8) -> bool {
    rank >= 0 && rank < 8 && file >= 0 && file < 8
}

const fn bit(rank: i8, file: i8) -> u64 {
    1u64 << (rank as u32 * 8 + file as u32)
}

const fn leaper_table(deltas: &[(i8, i8); 8]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut bits = 0u64;
        let mut d = 0;
        while d < deltas.len() {
            let r = rank + deltas[d].0;
            let f = file + deltas[d].1;
            if on_board(r, f) {
                bits |= bit(r, f);
            }
            d += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

/// Squares a pawn of each color attacks: index 0 White (north), 1 Black (south).
const fn pawn_table() -> [[Bitboard; 64]; 2] {
    let mut table = [[Bitboard::EMPTY; 64]; 2];
    let mut sq = 0;
    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut color = 0;
        while color < 2 {
            let r = if color == 0 { rank + 1 } else { rank - 1 };
            let mut bits = 0u64;
            if on_board(r, file - 1) {
                bits |= bit(r, file - 1);
            }
            if on_board(r, file + 1) {
                bits |= bit(r, file + 1);
            }
            table[color][sq] = Bitboard::new(bits);
            color += 1;
        }
        sq += 1;
    }
    table
}

/// Every square from `sq` to the edge in each direction, `sq` excluded.
const fn ray_table() -> [[Bitboard; 64]; 8] {
    let mut table = [[Bitboard::EMPTY; 64]; 8];
    let mut dir = 0;
    while dir < 8 {
        let (dr, df) = DIRECTIONS[dir];
        let mut sq = 0;
        while sq < 64 {
            let mut r = (sq / 8) as i8 + dr;
            let mut f = (sq % 8) as i8 + df;
            let mut bits = 0u64;
            while on_board(r, f) {
                bits |= bit(r, f);
                r += dr;
                f += df;
            }
            table[dir][sq] = Bitboard::new(bits);
            sq += 1;
        }
        dir += 1;
    }
    table
}

/// Unit step from `s1` toward `s2` when they share a rank, file or diagonal.
const fn step(s1: usize, s2: usize) -> Option<(i8, i8)> {
    if s1 == s2 {
        return None;
    }
    let dr = (s2 / 8) as i8 - (s1 / 8) as i8;
    let df = (s2 % 8) as i8 - (s1 % 8) as i8;
    if dr == 0 || df == 0 || dr == df || dr == -df {
        Some((dr.signum(), df.signum()))
    } else {
        None
    }
}

const fn between_table() -> [[Bitboard; 64]; 64] {
    let mut table = [[Bitboard::EMPTY; 64]; 64];
    let mut s1 = 0;
    while s1 < 64 {
        let mut s2 = 0;
        while s2 < 64 {
            if let Some((dr, df)) = step(s1, s2) {
                let mut r = (s1 / 8) as i8 + dr;
                let mut f = (s1 % 8) as i8 + df;
                let mut bits = 0u64;
                while (r * 8 + f) as usize != s2 {
                    bits |= bit(r, f);
                    r += dr;
                    f += df;
                }
                table[s1][s2] = Bitboard::new(bits);
            }
            s2 += 1;
        }
        s1 += 1;
    }
    table
}

const fn line_table() -> [[Bitboard; 64]; 64] {
    let mut table = [[Bitboard::EMPTY; 64]; 64];
    let mut s1 = 0;
    while s1 < 64 {
        let mut s2 = 0;
        while s2 < 64 {
            if let Some((dr, df)) = step(s1, s2) {
                let mut bits = 1u64 << s1;
                let mut sign = 1;
                while sign >= -1 {
                    let mut r = (s1 / 8) as i8 + dr * sign;
                    let mut f = (s1 % 8) as i8 + df * sign;
                    while on_board(r, f) {
                        bits |= bit(r, f);
                        r += dr * sign;
                        f += df * sign;
                    }
                    sign -= 2;
                }
                table[s1][s2] = Bitboard::new(bits);
            }
            s2 += 1;
        }
        s1 += 1;
    }
    table
}

pub(crate) static KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(&KNIGHT_DELTAS);
pub(crate) static KING_ATTACKS: [Bitboard; 64] = leaper_table(&KING_DELTAS);
pub(crate) static PAWN_ATTACKS: [[Bitboard; 64]; 2] = pawn_table();
pub(crate) static RAYS: [[Bitboard; 64]; 8] = ray_table();
pub(crate) static BETWEEN: [[Bitboard; 64]; 64] = between_table();
pub(crate) static LINE: [[Bitboard; 64]; 64] = line_table();
