//! Moves of pinned pieces, restricted to their pin ray.
//!
//! A pinned slider keeps whatever part of its attack set lies on the ray
//! (a rook diagonally pinned ends up with nothing, a queen always slides
//! along the ray); a pinned knight never moves. Pawns keep the pushes and
//! captures whose destination stays on the ray.

use super::pawns::en_passant_victim;
use crate::board::analysis::AttackInfo;
use crate::board::attack_tables::{bishop_attacks, pawn_attacks, queen_attacks, rook_attacks};
use crate::board::types::{Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};
use crate::board::{bit, bits, Board};

impl Board {
    pub(crate) fn generate_pinned_moves(&self, info: &AttackInfo, moves: &mut MoveList) {
        for pin in &info.pins[..info.num_pins] {
            let sq = pin.square;
            let allowed = pin.ray & info.evasion_mask;
            let (_, piece) = self.piece_at(sq).expect("pinned square must hold a piece");
            match piece {
                Piece::Pawn => self.pinned_pawn_moves(sq, pin.ray, info, moves),
                // A pinned knight has no move that stays on the ray
                Piece::Knight => {}
                Piece::Bishop => {
                    let targets = bishop_attacks(sq, self.all_occupied) & allowed;
                    self.push_piece_moves(sq, targets, moves);
                }
                Piece::Rook => {
                    let targets = rook_attacks(sq, self.all_occupied) & allowed;
                    self.push_piece_moves(sq, targets, moves);
                }
                Piece::Queen => {
                    let targets = queen_attacks(sq, self.all_occupied) & allowed;
                    self.push_piece_moves(sq, targets, moves);
                }
                Piece::King => unreachable!("the king cannot be pinned"),
            }
        }
    }

    fn pinned_pawn_moves(&self, from: Square, ray: u64, info: &AttackInfo, moves: &mut MoveList) {
        let us = self.current_color();
        let allowed = ray & info.evasion_mask;
        let empty = !self.all_occupied;
        let enemy = self.occupied[us.opponent().index()];
        let (delta, start_rank): (i8, usize) = if us == Color::White { (8, 1) } else { (-8, 6) };

        // Pushes: a pawn always has a forward square, it may just be off
        // the ray or occupied
        let one = Square::from_index((from.index() as i8 + delta) as usize);
        if bit(one) & empty != 0 {
            if bit(one) & allowed != 0 {
                if one.rank() == 0 || one.rank() == 7 {
                    for piece in PROMOTION_PIECES {
                        moves.push(Move::promotion(from, one, piece, false));
                    }
                } else {
                    moves.push(Move::quiet(from, one));
                }
            }
            if from.rank() == start_rank {
                let two = Square::from_index((from.index() as i8 + 2 * delta) as usize);
                if bit(two) & empty & allowed != 0 {
                    moves.push(Move::double_pawn_push(from, two));
                }
            }
        }

        // Captures along the ray (only a capture of the pinner qualifies)
        for to in bits(pawn_attacks(us, from) & enemy & allowed) {
            if to.rank() == 0 || to.rank() == 7 {
                for piece in PROMOTION_PIECES {
                    moves.push(Move::promotion(from, to, piece, true));
                }
            } else {
                moves.push(Move::capture(from, to));
            }
        }

        // En passant while pinned: legal only if the target square stays
        // on the ray
        if let Some(ep) = self.en_passant_target {
            if bit(ep) & pawn_attacks(us, from) & ray != 0 {
                let captured_sq = en_passant_victim(ep, us);
                if (bit(ep) | bit(captured_sq)) & info.evasion_mask != 0
                    && self.en_passant_is_safe(from, captured_sq, us)
                {
                    moves.push(Move::en_passant(from, ep));
                }
            }
        }
    }
}
