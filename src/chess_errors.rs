//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type of the crate. Setup and invariant
//! violations (missing king, two pieces on one square) surface here when a
//! `Position` is built; parsing helpers report malformed input here too.
//!
//! Illegal move attempts are not errors; `Player::make_move` reports them
//! as `MoveStatus` values.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Side, Square};

pub type ChessResult<T> = Result<T, ChessErrors>;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// An index outside `0..64` was used to address the board.
    InvalidSquare(i32),

    /// Two pieces were placed on the same square while building a position.
    DuplicatePiece(Square),

    /// A side has no king among its active pieces.
    MissingKing(Side),

    /// A side has more than one king among its active pieces.
    MultipleKings(Side),

    /// The en-passant target is not a square a double pawn push can skip.
    InvalidEnPassantTarget(Square),

    /// The Null move sentinel was applied to a position.
    NullMoveApplied,

    /// A move referenced a piece that is not on the board it was applied to.
    ///
    /// Payload: the square the piece claimed to occupy.
    PieceNotOnBoard(Square),

    /// The provided FEN string is invalid or could not be parsed.
    InvalidFen(String),

    /// A square or move in algebraic notation could not be parsed.
    InvalidAlgebraic(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidSquare(square) => write!(f, "square index out of bounds: {square}"),
            ChessErrors::DuplicatePiece(square) => {
                write!(f, "more than one piece placed on square {square}")
            }
            ChessErrors::MissingKing(side) => {
                write!(f, "the chess board you set up is invalid: no {side} king")
            }
            ChessErrors::MultipleKings(side) => {
                write!(f, "the chess board you set up is invalid: more than one {side} king")
            }
            ChessErrors::InvalidEnPassantTarget(square) => {
                write!(f, "invalid en-passant target square {square}")
            }
            ChessErrors::NullMoveApplied => write!(f, "cannot execute the null move"),
            ChessErrors::PieceNotOnBoard(square) => {
                write!(f, "moved piece is not on the board at square {square}")
            }
            ChessErrors::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessErrors::InvalidAlgebraic(msg) => write!(f, "invalid algebraic notation: {msg}"),
        }
    }
}

impl Error for ChessErrors {}

#[cfg(test)]
mod tests {
    use super::ChessErrors;
    use crate::game_state::chess_types::Side;

    #[test]
    fn display_names_the_offending_side() {
        let msg = ChessErrors::MissingKing(Side::Black).to_string();
        assert!(msg.contains("Black"), "unexpected message: {msg}");
        assert_eq!(
            ChessErrors::NullMoveApplied.to_string(),
            "cannot execute the null move"
        );
    }
}
