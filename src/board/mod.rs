//! Chess board representation and game logic.
//!
//! Uses bitboards with magic-indexed sliding attacks for move generation.
//! Supports full chess rules including castling, en passant, promotions,
//! the fifty-move rule and threefold repetition.
//!
//! # Example
//! ```
//! use skiff::board::Board;
//!
//! let board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod analysis;
mod attack_tables;
#[cfg(debug_assertions)]
mod debug;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod pst;
mod search;
mod state;
mod types;
mod zobrist;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveParseError, SquareError};
pub use state::{Board, GameStatus};
pub use types::{Color, Move, MoveList, MoveListIntoIter, Piece, Square};

// Public API - search entry points
pub use search::{find_best_move, find_best_move_at_depth, SearchResult, DEFAULT_DEPTH};

pub(crate) use types::{
    bit, bits, castle_bit, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
    FILE_A, FILE_H, RANK_1, RANK_3, RANK_6, RANK_8,
};
