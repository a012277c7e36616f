//! Bishop, rook and queen move generation via magic lookups.

use crate::board::analysis::AttackInfo;
use crate::board::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use crate::board::types::{MoveList, Piece};
use crate::board::{bits, Board};

impl Board {
    pub(crate) fn generate_slider_moves(&self, info: &AttackInfo, moves: &mut MoveList) {
        let us = self.current_color();
        let us_i = us.index();
        let own = self.occupied[us_i];
        let occ = self.all_occupied;
        let free = !info.pinned;

        for from in bits(self.pieces[us_i][Piece::Bishop.index()] & free) {
            let targets = bishop_attacks(from, occ) & !own & info.evasion_mask;
            self.push_piece_moves(from, targets, moves);
        }
        for from in bits(self.pieces[us_i][Piece::Rook.index()] & free) {
            let targets = rook_attacks(from, occ) & !own & info.evasion_mask;
            self.push_piece_moves(from, targets, moves);
        }
        for from in bits(self.pieces[us_i][Piece::Queen.index()] & free) {
            let targets = queen_attacks(from, occ) & !own & info.evasion_mask;
            self.push_piece_moves(from, targets, moves);
        }
    }
}
