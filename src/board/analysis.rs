//! Attack and threat analysis: opponent attack map, check detection,
//! check-evasion masks and pinned pieces.

use super::attack_tables::{
    between, bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks,
};
use super::types::{Color, Piece, Square};
use super::{bit, bits};
use super::Board;

pub(crate) const FULL_BOARD: u64 = !0u64;

/// A pinned piece and the squares it may still move to: the ray from the
/// king through the pinning slider, slider square included (capturable).
#[derive(Clone, Copy)]
pub(crate) struct Pin {
    pub(crate) square: Square,
    pub(crate) ray: u64,
}

/// Derived per-position state, recomputed before each move generation.
pub(crate) struct AttackInfo {
    /// Squares the opponent attacks. Sliding attacks are computed with the
    /// defending king removed from the occupancy, so the king cannot hide
    /// on its own escape ray.
    pub(crate) attack_map: u64,
    /// Number of pieces giving check (0, 1 or 2)
    pub(crate) checkers: u32,
    /// Squares a non-king move may target to resolve a single check:
    /// the checker's square, plus the blocking squares for a slider.
    /// All ones when not in check.
    pub(crate) evasion_mask: u64,
    /// Friendly pieces pinned to the king
    pub(crate) pinned: u64,
    pub(crate) pins: [Pin; 8],
    pub(crate) num_pins: usize,
}

impl Board {
    pub(crate) fn analyze(&self, us: Color) -> AttackInfo {
        let them = us.opponent();
        let us_i = us.index();
        let them_i = them.index();
        let king_sq = self.king_square(us);

        let their_pawns = self.pieces[them_i][Piece::Pawn.index()];
        let their_knights = self.pieces[them_i][Piece::Knight.index()];
        let their_diag = self.pieces[them_i][Piece::Bishop.index()]
            | self.pieces[them_i][Piece::Queen.index()];
        let their_orth = self.pieces[them_i][Piece::Rook.index()]
            | self.pieces[them_i][Piece::Queen.index()];

        let occ_no_king = self.all_occupied & !bit(king_sq);

        let mut attack_map = 0u64;
        for sq in bits(their_pawns) {
            attack_map |= pawn_attacks(them, sq);
        }
        for sq in bits(their_knights) {
            attack_map |= knight_attacks(sq);
        }
        attack_map |= king_attacks(self.king_square(them));
        for sq in bits(their_diag) {
            attack_map |= bishop_attacks(sq, occ_no_king);
        }
        for sq in bits(their_orth) {
            attack_map |= rook_attacks(sq, occ_no_king);
        }

        let mut checkers = 0u32;
        let mut evasion_mask = 0u64;

        let pawn_checkers = pawn_attacks(us, king_sq) & their_pawns;
        checkers += pawn_checkers.count_ones();
        evasion_mask |= pawn_checkers;

        let knight_checkers = knight_attacks(king_sq) & their_knights;
        checkers += knight_checkers.count_ones();
        evasion_mask |= knight_checkers;

        for sq in bits(bishop_attacks(king_sq, self.all_occupied) & their_diag) {
            checkers += 1;
            evasion_mask |= between(king_sq, sq) | bit(sq);
        }
        for sq in bits(rook_attacks(king_sq, self.all_occupied) & their_orth) {
            checkers += 1;
            evasion_mask |= between(king_sq, sq) | bit(sq);
        }

        if checkers == 0 {
            evasion_mask = FULL_BOARD;
        }

        // Pin pass: a slider aligned with the king pins the single friendly
        // piece standing between them. Candidates are found on the king's
        // empty-board slider rays, so a slider hiding behind another piece
        // is rejected by the blocker count.
        let mut pinned = 0u64;
        let mut pins = [Pin {
            square: Square::from_index(0),
            ray: 0,
        }; 8];
        let mut num_pins = 0usize;

        let candidates = (bishop_attacks(king_sq, 0) & their_diag)
            | (rook_attacks(king_sq, 0) & their_orth);
        for cand in bits(candidates) {
            let ray = between(king_sq, cand);
            let blockers = ray & self.all_occupied;
            if blockers.count_ones() == 1 && blockers & self.occupied[us_i] != 0 {
                pinned |= blockers;
                pins[num_pins] = Pin {
                    square: Square::from_index(blockers.trailing_zeros() as usize),
                    ray: ray | bit(cand),
                };
                num_pins += 1;
            }
        }

        AttackInfo {
            attack_map,
            checkers,
            evasion_mask,
            pinned,
            pins,
            num_pins,
        }
    }

    /// All pieces of `by` attacking the given square.
    pub(crate) fn attackers_to(&self, sq: Square, by: Color) -> u64 {
        let by_i = by.index();
        let occ = self.all_occupied;
        let diag = self.pieces[by_i][Piece::Bishop.index()] | self.pieces[by_i][Piece::Queen.index()];
        let orth = self.pieces[by_i][Piece::Rook.index()] | self.pieces[by_i][Piece::Queen.index()];

        (pawn_attacks(by.opponent(), sq) & self.pieces[by_i][Piece::Pawn.index()])
            | (knight_attacks(sq) & self.pieces[by_i][Piece::Knight.index()])
            | (king_attacks(sq) & self.pieces[by_i][Piece::King.index()])
            | (bishop_attacks(sq, occ) & diag)
            | (rook_attacks(sq, occ) & orth)
    }

    /// True when the given side's king is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.attackers_to(self.king_square(color), color.opponent()) != 0
    }

    /// The set of squares the opponent of the side to move attacks.
    /// The side to move's king may not step onto any of them.
    #[must_use]
    pub fn opponent_attack_map(&self) -> u64 {
        self.analyze(self.current_color()).attack_map
    }
}
