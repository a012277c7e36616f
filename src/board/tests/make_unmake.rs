//! Make/unmake round-trip tests.

use crate::board::{Board, Move, Piece, Square};
use rand::prelude::*;

fn find_move(board: &Board, from: Square, to: Square, promotion: Option<Piece>) -> Move {
    for m in board.generate_moves().iter() {
        if m.from() == from && m.to() == to && m.promotion_piece() == promotion {
            return *m;
        }
    }
    panic!("Expected move {from}{to} not found");
}

#[test]
fn test_en_passant_make_unmake() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let original_hash = board.hash();
    let original_ep = board.en_passant_target();
    let mv = find_move(&board, Square::new(4, 4), Square::new(5, 5), None);
    assert!(mv.is_en_passant());

    board.make_move(mv);
    // The captured pawn is gone from f5
    assert_eq!(board.piece_at(Square::new(4, 5)), None);

    board.unmake_move(mv);
    assert_eq!(board.hash(), original_hash);
    assert_eq!(board.en_passant_target(), original_ep);
    assert_eq!(
        board.piece_at(Square::new(4, 5)),
        Some((crate::board::Color::Black, Piece::Pawn))
    );
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let original_hash = board.hash();
    let mv = find_move(
        &board,
        Square::new(6, 0),
        Square::new(7, 0),
        Some(Piece::Queen),
    );

    board.make_move(mv);
    assert_eq!(
        board.piece_at(Square::new(7, 0)),
        Some((crate::board::Color::White, Piece::Queen))
    );

    board.unmake_move(mv);
    assert_eq!(board.hash(), original_hash);
    assert_eq!(
        board.piece_at(Square::new(6, 0)),
        Some((crate::board::Color::White, Piece::Pawn))
    );
}

#[test]
fn test_castling_make_unmake() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let original_fen = board.to_fen();
    let original_hash = board.hash();
    let mv = find_move(&board, Square::new(0, 4), Square::new(0, 6), None);
    assert!(mv.is_castling());

    board.make_move(mv);
    assert_eq!(
        board.piece_at(Square::new(0, 5)),
        Some((crate::board::Color::White, Piece::Rook))
    );
    assert_eq!(
        board.piece_at(Square::new(0, 6)),
        Some((crate::board::Color::White, Piece::King))
    );

    board.unmake_move(mv);
    assert_eq!(board.to_fen(), original_fen);
    assert_eq!(board.hash(), original_hash);
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Board::new();
    let initial_moves = board.generate_moves();
    let mut initial_list: Vec<String> = initial_moves.iter().map(|m| m.to_string()).collect();
    initial_list.sort();

    for mv in initial_moves.iter() {
        board.make_move(*mv);
        board.unmake_move(*mv);
    }

    let after_moves = board.generate_moves();
    let mut after_list: Vec<String> = after_moves.iter().map(|m| m.to_string()).collect();
    after_list.sort();

    assert_eq!(initial_list, after_list);
}

#[test]
fn test_hash_matches_recompute_after_random_moves() {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut played: Vec<Move> = Vec::new();

    for _ in 0..50 {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.make_move(mv);
        played.push(mv);

        assert_eq!(board.hash(), board.calculate_hash());
    }

    while let Some(mv) = played.pop() {
        board.unmake_move(mv);
        assert_eq!(board.hash(), board.calculate_hash());
    }
}

#[test]
fn test_random_playout_round_trip_state() {
    let mut board = Board::new();
    let initial_fen = board.to_fen();
    let initial_hash = board.hash();
    let initial_state = board.state();

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut played: Vec<Move> = Vec::new();

    for _ in 0..200 {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.make_move(mv);
        played.push(mv);
    }

    while let Some(mv) = played.pop() {
        board.unmake_move(mv);
    }

    assert_eq!(board.to_fen(), initial_fen);
    assert_eq!(board.hash(), initial_hash);
    assert_eq!(board.state(), initial_state);
    assert!(board.en_passant_target().is_none());
}

#[test]
fn test_history_tracks_unmatched_makes() {
    let mut board = Board::new();
    let first = board.generate_moves()[0];
    board.make_move(first);
    let second = board.generate_moves()[0];
    board.make_move(second);
    assert_eq!(board.history.len(), 2);

    board.unmake_move(second);
    assert_eq!(board.history.len(), 1);
    board.unmake_move(first);
    assert_eq!(board.history.len(), 0);
}

#[test]
fn test_fullmove_counter() {
    let mut board = Board::new();
    assert_eq!(board.fullmove_number, 1);
    board.make_move_uci("e2e4").unwrap();
    assert_eq!(board.fullmove_number, 1);
    board.make_move_uci("e7e5").unwrap();
    assert_eq!(board.fullmove_number, 2);
}
