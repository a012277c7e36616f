//! Debug-build consistency checks, run after every make/unmake.

use super::types::{decode_piece, Color, Piece, Square};
use super::{bit, Board, RANK_1, RANK_8};

impl Board {
    /// Assert that the redundant board representations agree, the hash
    /// matches a full recompute and the history stacks track the ply.
    pub(crate) fn debug_validate(&self) {
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            match decode_piece(self.squares[idx]) {
                Some((color, piece)) => {
                    debug_assert!(
                        self.pieces[color.index()][piece.index()] & bit(sq) != 0,
                        "square array says {color:?} {piece:?} on {sq}, bitboard disagrees"
                    );
                }
                None => {
                    debug_assert!(
                        self.all_occupied & bit(sq) == 0,
                        "square array says {sq} empty, occupancy disagrees"
                    );
                }
            }
        }

        for color in [Color::White, Color::Black] {
            let mut union = 0u64;
            for kind in 0..6 {
                union |= self.pieces[color.index()][kind];
            }
            debug_assert_eq!(union, self.occupied[color.index()], "{color} occupancy stale");
        }
        debug_assert_eq!(self.occupied[0] & self.occupied[1], 0, "sides overlap");
        debug_assert_eq!(self.occupied[0] | self.occupied[1], self.all_occupied);

        debug_assert_eq!(self.pieces[0][Piece::King.index()].count_ones(), 1);
        debug_assert_eq!(self.pieces[1][Piece::King.index()].count_ones(), 1);

        let pawns = self.pieces[0][Piece::Pawn.index()] | self.pieces[1][Piece::Pawn.index()];
        debug_assert_eq!(pawns & (RANK_1 | RANK_8), 0, "pawn on a back rank");

        debug_assert_eq!(self.hash, self.calculate_hash(), "incremental hash diverged");

        debug_assert_eq!(self.history.len(), self.ply as usize);
        debug_assert_eq!(self.hash_history.len(), self.ply as usize);
    }
}
