//! Perft harness and console play loop.
//!
//! Flags: `-b <FEN>` starting position (default standard start),
//! `-p <D>` run perft for depths 0..D, `-c w|b` play against the engine
//! with it taking the given side.

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

use skiff::board::{find_best_move, Board, GameStatus};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut fen: Option<String> = None;
    let mut perft_depth: Option<usize> = None;
    let mut engine_is_white: Option<bool> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-b" => {
                i += 1;
                match args.get(i) {
                    Some(f) => fen = Some(f.clone()),
                    None => return usage(),
                }
            }
            "-p" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(d) => perft_depth = Some(d),
                    None => return usage(),
                }
            }
            "-c" => {
                i += 1;
                match args.get(i).map(String::as_str) {
                    Some("w") => engine_is_white = Some(true),
                    Some("b") => engine_is_white = Some(false),
                    _ => return usage(),
                }
            }
            _ => return usage(),
        }
        i += 1;
    }

    let mut board = match fen {
        Some(f) => match Board::try_from_fen(&f) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("Invalid FEN: {e}");
                return ExitCode::from(1);
            }
        },
        None => Board::new(),
    };

    if let Some(depth) = perft_depth {
        run_perft(&mut board, depth);
        return ExitCode::SUCCESS;
    }

    if let Some(engine_white) = engine_is_white {
        play(&mut board, engine_white);
        return ExitCode::SUCCESS;
    }

    usage()
}

fn usage() -> ExitCode {
    eprintln!("Usage: perft [-b <FEN>] [-p <depth>] [-c w|b]");
    ExitCode::from(1)
}

fn run_perft(board: &mut Board, max_depth: usize) {
    for depth in 0..=max_depth {
        let start = Instant::now();
        let nodes = board.perft(depth);
        let elapsed = start.elapsed();
        let nps = if elapsed.as_secs_f64() > 0.0 {
            (nodes as f64 / elapsed.as_secs_f64()) as u64
        } else {
            0
        };
        println!("{depth}: {nodes} {} {nps}", elapsed.as_millis());
    }
}

fn play(board: &mut Board, engine_is_white: bool) {
    let stdin = io::stdin();
    loop {
        println!("{board}");
        match board.game_status() {
            GameStatus::Mate => {
                let winner = if board.white_to_move() { "Black" } else { "White" };
                println!("Checkmate, {winner} wins");
                return;
            }
            GameStatus::Draw => {
                println!("Draw");
                return;
            }
            GameStatus::Ongoing => {}
        }

        if board.white_to_move() == engine_is_white {
            let result = find_best_move(board);
            let Some(mv) = result.best_move else { return };
            println!("engine plays {mv}");
            board.make_move(mv);
        } else {
            print!("your move: ");
            io::stdout().flush().ok();
            let mut line = String::new();
            if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
                return;
            }
            let input = line.trim();
            if input == "quit" {
                return;
            }
            if let Err(e) = board.make_move_uci(input) {
                println!("{e}");
            }
        }
    }
}
