//! Square conversions for algebraic coordinates.
//!
//! Square 0 is `a8` and square 63 is `h1`: files run left to right within a
//! row, rows run from Black's back rank down to White's.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{NUM_TILES, NUM_TILES_PER_ROW};
use crate::game_state::chess_types::Square;

const ROW_WIDTH: u8 = NUM_TILES_PER_ROW as u8;

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let &[file, rank] = square.as_bytes() else {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    };

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file_index = file - b'a';
    let row_index = b'8' - rank;
    Ok(row_index * ROW_WIDTH + file_index)
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square as usize >= NUM_TILES {
        return Err(ChessErrors::InvalidSquare(i32::from(square)));
    }

    let file_char = char::from(b'a' + square % ROW_WIDTH);
    let rank_char = char::from(b'8' - square / ROW_WIDTH);

    Ok(format!("{file_char}{rank_char}"))
}
