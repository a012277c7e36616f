//! Zobrist hashing for chess positions.
//!
//! 793 independent 64-bit keys: 12x64 piece-square keys, one side-to-move
//! key, 16 castling-state keys (indexed by the packed 4-bit rights value)
//! and 8 en-passant file keys. The generator seed is fixed so that two runs
//! over identical move sequences produce identical hashes.

use once_cell::sync::Lazy;
use rand::prelude::*;

pub(crate) struct ZobristKeys {
    /// piece[color][piece_type][square]
    pub(crate) piece: [[[u64; 64]; 6]; 2],
    /// XORed in when Black is to move
    pub(crate) side_to_move: u64,
    /// Indexed by the full 4-bit castling rights value
    pub(crate) castling: [u64; 16],
    /// Indexed by the en-passant target file
    pub(crate) en_passant_file: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0x00C0_FFEE_D00D_1E55);
        let mut piece = [[[0u64; 64]; 6]; 2];
        let mut castling = [0u64; 16];
        let mut en_passant_file = [0u64; 8];

        for color in &mut piece {
            for kind in color.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let side_to_move = rng.gen();

        for key in &mut castling {
            *key = rng.gen();
        }

        for key in &mut en_passant_file {
            *key = rng.gen();
        }

        ZobristKeys {
            piece,
            side_to_move,
            castling,
            en_passant_file,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_distinct() {
        let mut seen = HashSet::new();
        for color in &ZOBRIST.piece {
            for kind in color {
                for &key in kind {
                    assert!(seen.insert(key));
                }
            }
        }
        assert!(seen.insert(ZOBRIST.side_to_move));
        for &key in &ZOBRIST.castling {
            assert!(seen.insert(key));
        }
        for &key in &ZOBRIST.en_passant_file {
            assert!(seen.insert(key));
        }
        assert_eq!(seen.len(), 793);
    }

    #[test]
    fn test_keys_are_deterministic() {
        let again = ZobristKeys::new();
        assert_eq!(again.side_to_move, ZOBRIST.side_to_move);
        assert_eq!(again.piece[0][0][0], ZOBRIST.piece[0][0][0]);
        assert_eq!(again.castling, ZOBRIST.castling);
        assert_eq!(again.en_passant_file, ZOBRIST.en_passant_file);
    }
}
