//! Draw detection: fifty-move rule, threefold repetition, insufficient
//! material.

use crate::board::{Board, GameStatus};

#[test]
fn test_threefold_by_knight_shuffle() {
    let mut board = Board::new();
    for uci in [
        "g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8",
    ] {
        assert_eq!(board.game_status(), GameStatus::Ongoing);
        board.make_move_uci(uci).unwrap();
    }
    // The starting position has now occurred three times
    assert_eq!(board.game_status(), GameStatus::Draw);
}

#[test]
fn test_repetition_window_resets_on_pawn_move() {
    let mut board = Board::new();
    for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
        board.make_move_uci(uci).unwrap();
    }
    // One prior occurrence of this position so far
    assert_eq!(board.repetitions_in_window(), 1);

    // A pawn move is irreversible: the window restarts
    board.make_move_uci("e2e4").unwrap();
    assert_eq!(board.repetitions_in_window(), 0);
}

#[test]
fn test_fifty_move_rule() {
    let mut board = Board::from_fen("k7/8/8/8/8/8/8/K6R w - - 99 80");
    assert_eq!(board.game_status(), GameStatus::Ongoing);

    board.make_move_uci("h1h2").unwrap();
    assert_eq!(board.halfmove_clock(), 100);
    assert_eq!(board.game_status(), GameStatus::Draw);
}

#[test]
fn test_fifty_move_clock_reset_by_capture() {
    let mut board = Board::from_fen("k6r/8/8/8/8/8/8/K6R w - - 99 80");
    board.make_move_uci("h1h8").unwrap();
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.game_status(), GameStatus::Ongoing);
}

#[test]
fn test_stalemate_is_draw() {
    let board = Board::from_fen("k7/2Q5/8/8/8/8/8/4K3 b - - 0 1");
    assert!(board.generate_moves().is_empty());
    assert_eq!(board.game_status(), GameStatus::Draw);
}

#[test]
fn test_insufficient_material() {
    // Bare kings
    assert!(Board::from_fen("k7/8/8/8/8/8/8/K7 w - - 0 1").is_insufficient_material());
    // King and knight vs king
    assert!(Board::from_fen("k7/8/8/8/8/8/8/KN6 w - - 0 1").is_insufficient_material());
    // King and bishop vs king
    assert!(Board::from_fen("k7/8/8/8/8/8/8/KB6 w - - 0 1").is_insufficient_material());
    // Same-colored bishops (b1 and c8 are both light squares)
    assert!(Board::from_fen("k1b5/8/8/8/8/8/8/KB6 w - - 0 1").is_insufficient_material());
    // Opposite-colored bishops can still mate
    assert!(!Board::from_fen("kb6/8/8/8/8/8/8/KB6 w - - 0 1").is_insufficient_material());

    // A pawn can still win
    assert!(!Board::from_fen("k7/8/8/8/8/8/P7/K7 w - - 0 1").is_insufficient_material());
    // Two knights are not an automatic draw
    assert!(!Board::from_fen("k7/8/8/8/8/8/8/KNN5 w - - 0 1").is_insufficient_material());
    // A rook mates
    assert!(!Board::from_fen("k7/8/8/8/8/8/8/KR6 w - - 0 1").is_insufficient_material());
}

#[test]
fn test_theoretical_draw_combines_rules() {
    let board = Board::from_fen("k7/8/8/8/8/8/8/KB6 w - - 0 1");
    assert!(board.is_theoretical_draw());
    // game_status itself stays Ongoing: there are legal moves and no rule
    // draw has triggered
    assert_eq!(board.game_status(), GameStatus::Ongoing);
}
