pub mod board;

pub use board::{Board, GameStatus, Move, MoveList};
