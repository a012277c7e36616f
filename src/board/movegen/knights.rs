//! Knight move generation.

use crate::board::analysis::AttackInfo;
use crate::board::attack_tables::knight_attacks;
use crate::board::types::{MoveList, Piece};
use crate::board::{bits, Board};

impl Board {
    pub(crate) fn generate_knight_moves(&self, info: &AttackInfo, moves: &mut MoveList) {
        let us = self.current_color();
        let knights = self.pieces[us.index()][Piece::Knight.index()] & !info.pinned;
        for from in bits(knights) {
            let targets = knight_attacks(from) & !self.occupied[us.index()] & info.evasion_mask;
            self.push_piece_moves(from, targets, moves);
        }
    }
}
