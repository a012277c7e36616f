//! FEN parsing/serialization and UCI long-algebraic move lookup.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::movegen::en_passant_victim;
use super::types::{file_to_index, rank_to_index, Color, Move, Piece, Square};
use super::{castle_bit, RANK_1, RANK_8};
use super::{CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q};
use super::Board;

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Returns an error if the FEN string is invalid or describes a
    /// position the engine cannot play (missing kings, pawns on the
    /// back ranks).
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::MissingFields { found: parts.len() });
        }

        // Parse piece placement, rank 8 down to rank 1
        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::TooManyRanks);
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(d) = c.to_digit(10) {
                    file += d as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::BadPiece(c))?;
                    if file >= 8 {
                        return Err(FenError::RankTooLong { rank: rank_idx });
                    }
                    board.set_piece(Square::new(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
        }

        // Parse side to move
        match parts[1] {
            "w" => board.white_to_move = true,
            "b" => board.white_to_move = false,
            other => return Err(FenError::BadSideToMove(other.to_string())),
        }

        // Parse castling rights
        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights |= CASTLE_WHITE_K,
                'Q' => board.castling_rights |= CASTLE_WHITE_Q,
                'k' => board.castling_rights |= CASTLE_BLACK_K,
                'q' => board.castling_rights |= CASTLE_BLACK_Q,
                '-' => {}
                _ => return Err(FenError::BadCastling(c)),
            }
        }

        // Parse en passant target
        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let mut chars = parts[3].chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(f), Some(r), None)
                    if ('a'..='h').contains(&f) && ('1'..='8').contains(&r) =>
                {
                    Some(Square::new(rank_to_index(r), file_to_index(f)))
                }
                _ => return Err(FenError::BadEnPassant(parts[3].to_string())),
            }
        };

        // Clocks are optional; missing or malformed values fall back to
        // game-start defaults
        if parts.len() >= 5 {
            board.halfmove_clock = parts[4].parse().unwrap_or(0);
        }
        if parts.len() >= 6 {
            board.fullmove_number = parts[5].parse().unwrap_or(1);
        }

        board.validate_placement()?;
        board.normalize_castling_rights();
        board.normalize_en_passant();

        board.hash = board.calculate_hash();
        board.hash_history.clear();
        board.history.clear();
        board.ply = 0;
        board.repetition_start = 0;
        Ok(board)
    }

    /// Drop any claimed right whose king or rook is not on its home square,
    /// so move generation can trust the rights bits.
    fn normalize_castling_rights(&mut self) {
        for (color, rank) in [(Color::White, 0), (Color::Black, 7)] {
            if self.piece_at(Square::new(rank, 4)) != Some((color, Piece::King)) {
                self.castling_rights &= !(castle_bit(color, true) | castle_bit(color, false));
                continue;
            }
            if self.piece_at(Square::new(rank, 7)) != Some((color, Piece::Rook)) {
                self.castling_rights &= !castle_bit(color, true);
            }
            if self.piece_at(Square::new(rank, 0)) != Some((color, Piece::Rook)) {
                self.castling_rights &= !castle_bit(color, false);
            }
        }
    }

    /// Ignore an en passant square with no freshly double-pushed enemy pawn
    /// behind it.
    fn normalize_en_passant(&mut self) {
        let Some(ep) = self.en_passant_target else {
            return;
        };
        let us = self.current_color();
        let expected_rank = if us == Color::White { 5 } else { 2 };
        if ep.rank() != expected_rank || !self.is_empty_square(ep) {
            self.en_passant_target = None;
            return;
        }
        let victim = en_passant_victim(ep, us);
        if self.piece_at(victim) != Some((us.opponent(), Piece::Pawn)) {
            self.en_passant_target = None;
        }
    }

    fn validate_placement(&self) -> Result<(), FenError> {
        for color in [Color::White, Color::Black] {
            let kings = self.pieces[color.index()][Piece::King.index()];
            if kings.count_ones() != 1 {
                return Err(FenError::IllegalPosition(format!(
                    "{color} must have exactly one king"
                )));
            }
        }
        let pawns =
            self.pieces[0][Piece::Pawn.index()] | self.pieces[1][Piece::Pawn.index()];
        if pawns & (RANK_1 | RANK_8) != 0 {
            return Err(FenError::IllegalPosition(
                "pawn on rank 1 or 8".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::new(rank, file);
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let mut castling = String::new();
        if self.castling_rights & CASTLE_WHITE_K != 0 {
            castling.push('K');
        }
        if self.castling_rights & CASTLE_WHITE_Q != 0 {
            castling.push('Q');
        }
        if self.castling_rights & CASTLE_BLACK_K != 0 {
            castling.push('k');
        }
        if self.castling_rights & CASTLE_BLACK_Q != 0 {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in UCI long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why
    /// parsing failed.
    ///
    /// # Example
    /// ```
    /// use skiff::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        if !uci.is_ascii() || uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::Malformed(uci.to_string()));
        }

        let from_sq: Square = uci[0..2]
            .parse()
            .map_err(|_| MoveParseError::Malformed(uci.to_string()))?;
        let to_sq: Square = uci[2..4]
            .parse()
            .map_err(|_| MoveParseError::Malformed(uci.to_string()))?;

        let promotion = match uci.as_bytes().get(4) {
            None => None,
            Some(&b) => {
                let c = b as char;
                let piece = Piece::from_char(c)
                    .filter(|p| !matches!(p, Piece::Pawn | Piece::King))
                    .ok_or(MoveParseError::BadPromotion(c))?;
                Some(piece)
            }
        };

        let legal_moves = self.generate_moves();
        for legal_move in &legal_moves {
            if legal_move.from() == from_sq
                && legal_move.to() == to_sq
                && legal_move.promotion_piece() == promotion
            {
                return Ok(*legal_move);
            }
        }

        Err(MoveParseError::NotLegal(uci.to_string()))
    }

    /// Parse a UCI move and make it on the board in one call.
    ///
    /// # Example
    /// ```
    /// use skiff::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.make_move_uci("e2e4").unwrap();
    /// board.make_move_uci("e7e5").unwrap();
    /// ```
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(uci)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
