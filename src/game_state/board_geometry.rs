//! Square index geometry.
//!
//! Pure helpers mapping a linear square index to its row and column, plus
//! compile-time membership tables used to suppress offsets that would wrap
//! around a board edge. Rows and columns in the table names are 1-indexed
//! from the top-left corner (a8).

use crate::game_state::chess_rules::{NUM_TILES, NUM_TILES_PER_ROW};
use crate::game_state::chess_types::Square;

pub const FIRST_COLUMN: [bool; NUM_TILES] = generate_column(0);
pub const SECOND_COLUMN: [bool; NUM_TILES] = generate_column(1);
pub const SEVENTH_COLUMN: [bool; NUM_TILES] = generate_column(6);
pub const EIGHTH_COLUMN: [bool; NUM_TILES] = generate_column(7);

pub const FIRST_ROW: [bool; NUM_TILES] = generate_row(0);
pub const SECOND_ROW: [bool; NUM_TILES] = generate_row(1);
pub const SEVENTH_ROW: [bool; NUM_TILES] = generate_row(6);
pub const EIGHTH_ROW: [bool; NUM_TILES] = generate_row(7);

#[inline]
pub const fn is_valid_square(candidate: i32) -> bool {
    candidate >= 0 && candidate < NUM_TILES as i32
}

/// Validate an offset-derived candidate and narrow it to a `Square`.
#[inline]
pub const fn square_from_candidate(candidate: i32) -> Option<Square> {
    if is_valid_square(candidate) {
        Some(candidate as Square)
    } else {
        None
    }
}

#[inline]
pub const fn column_of(square: Square) -> usize {
    square as usize % NUM_TILES_PER_ROW
}

#[inline]
pub const fn row_of(square: Square) -> usize {
    square as usize / NUM_TILES_PER_ROW
}

const fn generate_column(column: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut sq = column;

    while sq < NUM_TILES {
        table[sq] = true;
        sq += NUM_TILES_PER_ROW;
    }

    table
}

const fn generate_row(row: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut sq = row * NUM_TILES_PER_ROW;

    while sq < (row + 1) * NUM_TILES_PER_ROW {
        table[sq] = true;
        sq += 1;
    }

    table
}
