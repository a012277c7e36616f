//! Legal move generation.
//!
//! The generator is fully legal (no make/unmake filtering): the analyzer
//! provides the opponent attack map, check-evasion mask and pins, and each
//! piece generator intersects its targets accordingly. In double check only
//! the king moves.

mod kings;
mod knights;
mod pawns;
mod pinned;
mod sliders;

pub(crate) use pawns::en_passant_victim;

use super::types::{Move, MoveList, Square};
use super::{bit, bits};
use super::Board;

impl Board {
    /// Generate all legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let us = self.current_color();
        let info = self.analyze(us);
        let mut moves = MoveList::new();

        if info.checkers >= 2 {
            // Only the king can resolve a double check
            self.generate_king_moves(&info, &mut moves);
            return moves;
        }

        self.generate_pinned_moves(&info, &mut moves);
        self.generate_pawn_moves(&info, &mut moves);
        self.generate_knight_moves(&info, &mut moves);
        self.generate_slider_moves(&info, &mut moves);
        self.generate_king_moves(&info, &mut moves);
        moves
    }

    /// Bitboard of the squares the piece on `from` may legally move to.
    #[must_use]
    pub fn move_destinations(&self, from: Square) -> u64 {
        let mut dests = 0u64;
        for m in &self.generate_moves() {
            if m.from() == from {
                dests |= bit(m.to());
            }
        }
        dests
    }

    /// Resolve the stored move flag for a chosen (from, to) pair, so a
    /// caller supplying a plain coordinate move gets the correct
    /// capture/en-passant/castle tag. For promotions all four variants
    /// match; the queen's flag is the highest, so the maximum is returned.
    #[must_use]
    pub fn flag_for(&self, from: Square, to: Square) -> Option<u16> {
        self.generate_moves()
            .iter()
            .filter(|m| m.from() == from && m.to() == to)
            .map(|m| m.flags())
            .max()
    }

    /// Emit quiet/capture moves for one piece over a target bitboard.
    pub(crate) fn push_piece_moves(&self, from: Square, targets: u64, moves: &mut MoveList) {
        for to in bits(targets) {
            if self.is_empty_square(to) {
                moves.push(Move::quiet(from, to));
            } else {
                moves.push(Move::capture(from, to));
            }
        }
    }

    /// Count leaf nodes of the move generation tree at the given depth.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            self.make_move(*m);
            nodes += self.perft(depth - 1);
            self.unmake_move(*m);
        }

        nodes
    }
}
