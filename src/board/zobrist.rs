//! Zobrist hashing for chess positions.
//!
//! Provides incrementally-updatable 64-bit position fingerprints. Keys
//! are drawn once from a seeded RNG so hashes are reproducible across
//! runs.

use once_cell::sync::Lazy;
use rand::prelude::*;

use super::types::{Color, Piece, Square};

pub(crate) struct ZobristKeys {
    /// piece_keys[piece_kind][color][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) turn_key: u64,
    /// One key per castling-rights bitmask state (16 combinations).
    pub(crate) castling_keys: [u64; 16],
    /// en_passant_keys[file_index] - only the file of the target matters.
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        // Fixed seed for reproducibility.
        let mut rng = StdRng::seed_from_u64(987_654_321);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [0; 16];
        let mut en_passant_keys = [0; 8];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let turn_key = rng.gen();

        for key in &mut castling_keys {
            *key = rng.gen();
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            turn_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.index()]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
