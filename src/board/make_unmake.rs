//! Applying and reverting moves.
//!
//! `make_move` is the only commit point and `unmake_move` the only
//! rollback; each make pushes a restore record and the prior hash, each
//! unmake pops them. `make_move` is defined only for moves returned by
//! `generate_moves`.

use super::movegen::en_passant_victim;
use super::state::UnmakeInfo;
use super::types::{rights_cleared_by, Color, Move, Piece, Square, ALL_CASTLING_RIGHTS};
use super::zobrist::ZOBRIST;
use super::Board;

impl Board {
    /// Apply a legal move, updating bitboards, the square array, castling
    /// rights, clocks, the Zobrist hash and the history stacks.
    pub fn make_move(&mut self, m: Move) {
        let keys = &*ZOBRIST;
        let us = self.current_color();
        let from = m.from();
        let to = m.to();

        self.hash_history.push(self.hash);
        let mut record = UnmakeInfo {
            captured: None,
            prev_en_passant: self.en_passant_target,
            prev_castling_rights: self.castling_rights,
            prev_halfmove_clock: self.halfmove_clock,
        };

        // Side-to-move flips and any stale en-passant file leaves the hash
        self.hash ^= keys.side_to_move;
        if let Some(ep) = self.en_passant_target {
            self.hash ^= keys.en_passant_file[ep.file()];
        }

        self.ply += 1;
        self.halfmove_clock += 1;
        if us == Color::Black {
            self.fullmove_number += 1;
        }

        // Captures; en passant takes the pawn behind the target square
        if m.is_capture() {
            let cap_sq = if m.is_en_passant() {
                en_passant_victim(to, us)
            } else {
                to
            };
            let (cap_color, cap_piece) = self.piece_at(cap_sq).expect("capture target empty");
            self.remove_piece(cap_sq, cap_color, cap_piece);
            self.hash ^= keys.piece[cap_color.index()][cap_piece.index()][cap_sq.index()];
            record.captured = Some((cap_color, cap_piece));
            self.halfmove_clock = 0;
        }

        // Move the piece, replacing it on promotion
        let (_, piece) = self.piece_at(from).expect("moved-from square empty");
        self.remove_piece(from, us, piece);
        self.hash ^= keys.piece[us.index()][piece.index()][from.index()];
        let placed = m.promotion_piece().unwrap_or(piece);
        self.set_piece(to, us, placed);
        self.hash ^= keys.piece[us.index()][placed.index()][to.index()];

        if piece == Piece::Pawn {
            self.halfmove_clock = 0;
        }

        // Castling also moves the rook, to the square the king crossed
        if m.is_castling() {
            let (rook_from_file, rook_to_file) = if m.is_castle_kingside() {
                (7, 5)
            } else {
                (0, 3)
            };
            let rook_from = Square::new(to.rank(), rook_from_file);
            let rook_to = Square::new(to.rank(), rook_to_file);
            self.remove_piece(rook_from, us, Piece::Rook);
            self.set_piece(rook_to, us, Piece::Rook);
            self.hash ^= keys.piece[us.index()][Piece::Rook.index()][rook_from.index()]
                ^ keys.piece[us.index()][Piece::Rook.index()][rook_to.index()];
        }

        // A double push opens the skipped square to en passant
        self.en_passant_target = None;
        if m.is_double_pawn_push() {
            let ep = Square::from_index(usize::midpoint(from.index(), to.index()));
            self.en_passant_target = Some(ep);
            self.hash ^= keys.en_passant_file[ep.file()];
        }

        // Rights are lost when a move touches a king or rook home square,
        // whether by leaving it or by capturing on it
        let old_rights = self.castling_rights;
        self.castling_rights &= !(rights_cleared_by(from) | rights_cleared_by(to));
        if self.castling_rights != old_rights {
            self.hash ^=
                keys.castling[old_rights as usize] ^ keys.castling[self.castling_rights as usize];
        }
        debug_assert_eq!(self.castling_rights & !ALL_CASTLING_RIGHTS, 0);

        // An irreversible move starts a fresh repetition window
        if self.halfmove_clock == 0 {
            self.repetition_start = self.ply;
        }

        self.white_to_move = !self.white_to_move;
        self.history.push(record);

        #[cfg(debug_assertions)]
        self.debug_validate();
    }

    /// Revert the most recent `make_move`. The restore record carries
    /// rights, en passant and the clock; the hash is popped rather than
    /// recomputed.
    pub fn unmake_move(&mut self, m: Move) {
        let record = self.history.pop().expect("unmake without a matching make");
        self.hash = self.hash_history.pop().expect("hash history underflow");

        self.white_to_move = !self.white_to_move;
        let us = self.current_color();

        self.en_passant_target = record.prev_en_passant;
        self.castling_rights = record.prev_castling_rights;
        self.halfmove_clock = record.prev_halfmove_clock;
        self.ply -= 1;
        if us == Color::Black {
            self.fullmove_number -= 1;
        }
        self.repetition_start = self.ply.saturating_sub(self.halfmove_clock);

        let from = m.from();
        let to = m.to();

        if m.is_castling() {
            self.remove_piece(to, us, Piece::King);
            self.set_piece(from, us, Piece::King);
            let (rook_from_file, rook_to_file) = if m.is_castle_kingside() {
                (7, 5)
            } else {
                (0, 3)
            };
            self.remove_piece(Square::new(to.rank(), rook_to_file), us, Piece::Rook);
            self.set_piece(Square::new(to.rank(), rook_from_file), us, Piece::Rook);
        } else {
            let (_, placed) = self.piece_at(to).expect("unmake: destination empty");
            self.remove_piece(to, us, placed);
            let original = if m.is_promotion() { Piece::Pawn } else { placed };
            self.set_piece(from, us, original);

            if let Some((cap_color, cap_piece)) = record.captured {
                let cap_sq = if m.is_en_passant() {
                    en_passant_victim(to, us)
                } else {
                    to
                };
                self.set_piece(cap_sq, cap_color, cap_piece);
            }
        }

        #[cfg(debug_assertions)]
        self.debug_validate();
    }
}
