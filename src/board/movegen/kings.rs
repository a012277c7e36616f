//! King move and castling generation.

use crate::board::analysis::AttackInfo;
use crate::board::attack_tables::king_attacks;
use crate::board::types::{Color, Move, MoveList, Square};
use crate::board::{bit, Board};

impl Board {
    pub(crate) fn generate_king_moves(&self, info: &AttackInfo, moves: &mut MoveList) {
        let us = self.current_color();
        let from = self.king_square(us);
        let targets = king_attacks(from) & !self.occupied[us.index()] & !info.attack_map;
        self.push_piece_moves(from, targets, moves);

        if info.checkers == 0 {
            self.generate_castling_moves(us, info, moves);
        }
    }

    /// Castling needs the right, empty in-between squares (queenside also
    /// the b-file square) and an unattacked king path including start and
    /// destination.
    fn generate_castling_moves(&self, us: Color, info: &AttackInfo, moves: &mut MoveList) {
        let rank = if us == Color::White { 0 } else { 7 };
        let king_from = Square::new(rank, 4);

        if self.has_castling_right(us, true) {
            let f = Square::new(rank, 5);
            let g = Square::new(rank, 6);
            let path = bit(f) | bit(g);
            if self.all_occupied & path == 0 && info.attack_map & (bit(king_from) | path) == 0 {
                moves.push(Move::castle_kingside(king_from, g));
            }
        }

        if self.has_castling_right(us, false) {
            let b = Square::new(rank, 1);
            let c = Square::new(rank, 2);
            let d = Square::new(rank, 3);
            let king_path = bit(c) | bit(d);
            if self.all_occupied & (bit(b) | king_path) == 0
                && info.attack_map & (bit(king_from) | king_path) == 0
            {
                moves.push(Move::castle_queenside(king_from, c));
            }
        }
    }
}
