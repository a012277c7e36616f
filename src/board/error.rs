//! Error types for position setup and move parsing.
//!
//! Construction from FEN is the only fallible entry point into the engine;
//! everything downstream of a successfully built `Board` is total.

use std::fmt;

/// Why a FEN string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the four mandatory fields (placement, side, castling,
    /// en passant)
    MissingFields { found: usize },
    /// The placement contains a character that is not a piece letter,
    /// a digit or '/'
    BadPiece(char),
    /// The placement has more than eight ranks
    TooManyRanks,
    /// A placement row spills past the h-file
    RankTooLong { rank: usize },
    /// The side-to-move field is not 'w' or 'b'
    BadSideToMove(String),
    /// The castling field holds a character outside "KQkq" and '-'
    BadCastling(char),
    /// The en passant field is neither '-' nor a board square
    BadEnPassant(String),
    /// The placement describes a position the engine refuses to play
    /// (missing or duplicated kings, pawns on a back rank)
    IllegalPosition(String),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingFields { found } => {
                write!(
                    f,
                    "FEN needs placement, side, castling and en passant fields ({found} given)"
                )
            }
            FenError::BadPiece(c) => write!(f, "'{c}' is not a piece letter"),
            FenError::TooManyRanks => write!(f, "piece placement has more than eight ranks"),
            FenError::RankTooLong { rank } => {
                write!(f, "placement row {rank} runs past the h-file")
            }
            FenError::BadSideToMove(found) => {
                write!(f, "side to move must be 'w' or 'b', not '{found}'")
            }
            FenError::BadCastling(c) => write!(f, "'{c}' is not a castling right"),
            FenError::BadEnPassant(found) => {
                write!(f, "'{found}' is not an en passant square")
            }
            FenError::IllegalPosition(reason) => write!(f, "unplayable position: {reason}"),
        }
    }
}

impl std::error::Error for FenError {}

/// Why a coordinate-notation move was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Input is not from-square, to-square and an optional promotion piece
    Malformed(String),
    /// The promotion letter is not one of n, b, r, q
    BadPromotion(char),
    /// The move reads fine but the current position does not allow it
    NotLegal(String),
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::Malformed(input) => {
                write!(f, "'{input}' is not a coordinate move like e2e4 or e7e8q")
            }
            MoveParseError::BadPromotion(c) => write!(f, "cannot promote to '{c}'"),
            MoveParseError::NotLegal(input) => write!(f, "'{input}' is not legal here"),
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Why a square could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// The rank or file index lies outside the board
    OutOfBounds { rank: usize, file: usize },
    /// Text is not a file letter followed by a rank digit
    BadNotation(String),
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { rank, file } => {
                write!(f, "(rank {rank}, file {file}) is off the board")
            }
            SquareError::BadNotation(notation) => {
                write!(f, "'{notation}' is not a square name like e4")
            }
        }
    }
}

impl std::error::Error for SquareError {}
