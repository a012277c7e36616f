//! Static evaluation: material plus piece-square tables, with terminal
//! overrides for mate and draw.

use super::pst::{MATERIAL, PST};
use super::state::GameStatus;
use super::types::{Color, MoveList};
use super::{bits, Board};

/// Score returned for the side to move when checkmated.
pub(crate) const MATE_SCORE: i32 = 1_000_000;

impl Board {
    /// Centipawn score of the position from the side to move's point of
    /// view: mate is `-1_000_000`, a drawn position 0, anything else the
    /// material and piece-square balance.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let moves = self.generate_moves();
        self.evaluate_with_moves(&moves)
    }

    /// Evaluation reusing a move list the caller already generated.
    pub(crate) fn evaluate_with_moves(&self, moves: &MoveList) -> i32 {
        match self.status_with_moves(moves) {
            GameStatus::Mate => -MATE_SCORE,
            GameStatus::Draw => 0,
            GameStatus::Ongoing => self.material_score(),
        }
    }

    /// White material minus Black material, sign-flipped when Black is to
    /// move.
    fn material_score(&self) -> i32 {
        let mut score = 0i32;
        for kind in 0..6 {
            for sq in bits(self.pieces[Color::White.index()][kind]) {
                score += MATERIAL[kind] + PST[kind][sq.flip_vertical().index()];
            }
            for sq in bits(self.pieces[Color::Black.index()][kind]) {
                score -= MATERIAL[kind] + PST[kind][sq.index()];
            }
        }
        if self.white_to_move {
            score
        } else {
            -score
        }
    }
}
